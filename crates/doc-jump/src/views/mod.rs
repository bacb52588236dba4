pub mod nav;
pub mod search_bar;
pub mod status_bar;
pub mod topic;
