use modern_cli_domain::analytics::total_size;
use modern_cli_ports::filesystem::DirectoryLister;
use modern_cli_shared_kernel::Result;

use crate::dto::{ListRequest, ListingOutput};

pub struct ListDirectory<'a> {
    lister: &'a dyn DirectoryLister,
}

impl<'a> ListDirectory<'a> {
    pub fn new(lister: &'a dyn DirectoryLister) -> Self {
        Self { lister }
    }

    pub fn run(&self, request: &ListRequest) -> Result<ListingOutput> {
        tracing::debug!(
            directory = %request.directory.display(),
            pattern = request.pattern.pattern(),
            "listing directory"
        );
        let entries = self.lister.list(&request.directory, &request.pattern)?;
        let total_size = total_size(&entries);
        Ok(ListingOutput { entries, total_size })
    }
}
