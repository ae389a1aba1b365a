use deckbrief_types::{ContainerId, PageId, TableId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("unknown page handle: {0}")]
    UnknownPage(PageId),

    #[error("unknown container handle: {0}")]
    UnknownContainer(ContainerId),

    #[error("container {0} was already removed")]
    ContainerRemoved(ContainerId),

    #[error("unknown table handle: {0}")]
    UnknownTable(TableId),

    #[error("cell ({row}, {col}) out of bounds for table {table}")]
    CellOutOfBounds {
        table: TableId,
        row: usize,
        col: usize,
    },
}
