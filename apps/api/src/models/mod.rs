pub mod career;
pub mod skills;
