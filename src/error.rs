use thiserror::Error;

pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("group {group} has no items to display")]
    EmptyGroup { group: usize },

    #[error("group {group} is out of range, table holds {groups} groups")]
    UnknownGroup { group: usize, groups: usize },
}
