// testing utilities for building scratch repositories

pub mod git_repo;

pub use git_repo::TestGitRepo;
