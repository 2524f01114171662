use std::path::PathBuf;

use crate::consts::consts::DEFAULT_FOLLOW_UP_DAYS;

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub seed: bool,
    pub follow_up_days: u32,
    pub export_directory: PathBuf,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DashboardOptions {
    /// Defines whether the dashboard starts with the sample leads and users loaded
    pub fn set_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Days between creating a lead and its first follow up
    pub fn set_follow_up_days(mut self, follow_up_days: u32) -> Self {
        self.follow_up_days = follow_up_days;
        self
    }

    pub fn set_export_directory(mut self, export_directory: PathBuf) -> Self {
        self.export_directory = export_directory;
        self
    }
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            seed: true,
            follow_up_days: DEFAULT_FOLLOW_UP_DAYS,
            export_directory: PathBuf::from("exports"),
        }
    }
}

#[cfg(test)]
impl DashboardOptions {
    pub fn new_test() -> Self {
        let export_dir: PathBuf = ["/", "tmp", "leadflow", &uuid::Uuid::new_v4().to_string()]
            .iter()
            .collect();

        DashboardOptions::default()
            .set_seed(false)
            .set_export_directory(export_dir)
    }
}
