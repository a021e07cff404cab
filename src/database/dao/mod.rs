use crate::database::error::DatabaseError;

pub(crate) mod club;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;
