pub mod story_repository;
