pub mod actors;
pub mod movies;

use serde::Deserialize;

/// `?page=N` query parameter shared by every listing response.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}
