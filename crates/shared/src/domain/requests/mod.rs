mod auth;
mod market;
mod order;
mod wallet;

pub use self::auth::{ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest};
pub use self::market::{MarketQuery, MarketSort, PaginationQuery, SortOrder};
pub use self::order::{CreateOrderRequest, OrderQuery, OrderSide, OrderStatus, OrderType};
pub use self::wallet::{
    DepositRequest, TransactionKind, TransactionQuery, TransactionStatus, WithdrawalRequest,
};
