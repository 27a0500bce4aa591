pub mod complaints;
pub mod dead_stock;
pub mod register;
pub mod reports;
pub mod transfer;

use crate::errors::ServiceError;
use sea_orm::TransactionError;

/// Flattens sea-orm transaction errors into the service error taxonomy.
pub(crate) fn txn_err(e: TransactionError<ServiceError>) -> ServiceError {
    match e {
        TransactionError::Connection(e) => ServiceError::DatabaseError(e),
        TransactionError::Transaction(e) => e,
    }
}
