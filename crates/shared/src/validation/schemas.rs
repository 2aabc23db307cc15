//! Named request schemas shared by every resource of the API.

use crate::validation::rules::{
    Field, FieldKind, NumberCheck, Pattern, Schema, TextCheck, UnknownKeys,
};

pub const PROPERTY_STATUSES: &[&str] = &["available", "sold", "pending", "rented"];
const PROPERTY_STATUS_MESSAGE: &str = "Status must be one of: available, sold, pending, rented";

pub const ORDER_SIDES: &[&str] = &["buy", "sell"];
pub const ORDER_TYPES: &[&str] = &["market", "limit"];

pub static REGISTER: Schema = Schema {
    name: "register",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "email",
            required: true,
            kind: FieldKind::Text(&[TextCheck::Email("Invalid email format")]),
        },
        Field {
            name: "password",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(
                6,
                "Password must be at least 6 characters",
            )]),
        },
        Field {
            name: "name",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(
                2,
                "Name must be at least 2 characters",
            )]),
        },
    ],
};

pub static LOGIN: Schema = Schema {
    name: "login",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "email",
            required: true,
            kind: FieldKind::Text(&[TextCheck::Email("Invalid email format")]),
        },
        Field {
            name: "password",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(1, "Password is required")]),
        },
    ],
};

pub static ORDER: Schema = Schema {
    name: "order",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "pair",
            required: true,
            kind: FieldKind::Text(&[TextCheck::Matches(
                Pattern::TradingPair,
                "Invalid trading pair format",
            )]),
        },
        Field {
            name: "side",
            required: true,
            kind: FieldKind::Choice {
                options: ORDER_SIDES,
                message: Some("Side must be buy or sell"),
            },
        },
        Field {
            name: "type",
            required: true,
            kind: FieldKind::Choice {
                options: ORDER_TYPES,
                message: Some("Type must be market or limit"),
            },
        },
        Field {
            name: "amount",
            required: true,
            kind: FieldKind::Number(&[NumberCheck::Positive("Amount must be positive")]),
        },
        Field {
            name: "price",
            required: false,
            kind: FieldKind::Number(&[NumberCheck::Positive("Price must be positive")]),
        },
    ],
};

pub static DEPOSIT: Schema = Schema {
    name: "deposit",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "coin",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(2, "Coin symbol is required")]),
        },
        Field {
            name: "amount",
            required: true,
            kind: FieldKind::Number(&[NumberCheck::Positive("Amount must be positive")]),
        },
        Field {
            name: "network",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(1, "Network is required")]),
        },
        Field {
            name: "txHash",
            required: false,
            kind: FieldKind::Text(&[]),
        },
    ],
};

pub static WITHDRAWAL: Schema = Schema {
    name: "withdrawal",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "coin",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(2, "Coin symbol is required")]),
        },
        Field {
            name: "amount",
            required: true,
            kind: FieldKind::Number(&[NumberCheck::Positive("Amount must be positive")]),
        },
        Field {
            name: "address",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(10, "Valid address is required")]),
        },
        Field {
            name: "network",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(1, "Network is required")]),
        },
    ],
};

pub static UPDATE_PROFILE: Schema = Schema {
    name: "updateProfile",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "name",
            required: false,
            kind: FieldKind::Text(&[TextCheck::MinLength(
                2,
                "Name must be at least 2 characters",
            )]),
        },
        Field {
            name: "email",
            required: false,
            kind: FieldKind::Text(&[TextCheck::Email("Invalid email format")]),
        },
    ],
};

pub static CHANGE_PASSWORD: Schema = Schema {
    name: "changePassword",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "currentPassword",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(1, "Current password is required")]),
        },
        Field {
            name: "newPassword",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(
                6,
                "New password must be at least 6 characters",
            )]),
        },
    ],
};

pub static PROPERTY: Schema = Schema {
    name: "property",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "title",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(1, "Title is required")]),
        },
        Field {
            name: "description",
            required: false,
            kind: FieldKind::Text(&[]),
        },
        Field {
            name: "address",
            required: true,
            kind: FieldKind::Text(&[TextCheck::MinLength(1, "Address is required")]),
        },
        Field {
            name: "price",
            required: true,
            kind: FieldKind::Number(&[NumberCheck::Positive(
                "Price must be a positive number",
            )]),
        },
        Field {
            name: "status",
            required: false,
            kind: FieldKind::Choice {
                options: PROPERTY_STATUSES,
                message: Some(PROPERTY_STATUS_MESSAGE),
            },
        },
    ],
};

pub static UPDATE_PROPERTY: Schema = Schema {
    name: "updateProperty",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "title",
            required: false,
            kind: FieldKind::Text(&[TextCheck::MinLength(
                1,
                "Title must be at least 1 character",
            )]),
        },
        Field {
            name: "description",
            required: false,
            kind: FieldKind::Text(&[]),
        },
        Field {
            name: "address",
            required: false,
            kind: FieldKind::Text(&[TextCheck::MinLength(
                1,
                "Address must be at least 1 character",
            )]),
        },
        Field {
            name: "price",
            required: false,
            kind: FieldKind::Number(&[NumberCheck::Positive(
                "Price must be a positive number",
            )]),
        },
        Field {
            name: "status",
            required: false,
            kind: FieldKind::Choice {
                options: PROPERTY_STATUSES,
                message: Some(PROPERTY_STATUS_MESSAGE),
            },
        },
    ],
};

// query-string schemas

pub static PAGINATION_QUERY: Schema = Schema {
    name: "pagination",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "page",
            required: false,
            kind: FieldKind::Digits,
        },
        Field {
            name: "limit",
            required: false,
            kind: FieldKind::Digits,
        },
        Field {
            name: "sort",
            required: false,
            kind: FieldKind::Text(&[]),
        },
        Field {
            name: "order",
            required: false,
            kind: FieldKind::Choice {
                options: &["asc", "desc"],
                message: None,
            },
        },
    ],
};

pub static MARKET_QUERY: Schema = Schema {
    name: "marketQuery",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "search",
            required: false,
            kind: FieldKind::Text(&[]),
        },
        Field {
            name: "sort",
            required: false,
            kind: FieldKind::Choice {
                options: &["volume", "change", "price", "market-cap"],
                message: None,
            },
        },
        Field {
            name: "filter",
            required: false,
            kind: FieldKind::Text(&[]),
        },
    ],
};

pub static ORDER_QUERY: Schema = Schema {
    name: "orderQuery",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "status",
            required: false,
            kind: FieldKind::Choice {
                options: &["open", "filled", "cancelled", "partial"],
                message: None,
            },
        },
        Field {
            name: "pair",
            required: false,
            kind: FieldKind::Text(&[]),
        },
        Field {
            name: "limit",
            required: false,
            kind: FieldKind::Digits,
        },
    ],
};

pub static TRANSACTION_QUERY: Schema = Schema {
    name: "transactionQuery",
    unknown_keys: UnknownKeys::Strip,
    fields: &[
        Field {
            name: "type",
            required: false,
            kind: FieldKind::Choice {
                options: &["deposit", "withdraw", "trade", "transfer", "all"],
                message: None,
            },
        },
        Field {
            name: "status",
            required: false,
            kind: FieldKind::Choice {
                options: &["pending", "completed", "failed", "cancelled", "all"],
                message: None,
            },
        },
        Field {
            name: "limit",
            required: false,
            kind: FieldKind::Digits,
        },
    ],
};

/// The only query schema that keeps undeclared keys.
pub static PROPERTY_QUERY: Schema = Schema {
    name: "propertyQuery",
    unknown_keys: UnknownKeys::Passthrough,
    fields: &[
        Field {
            name: "status",
            required: false,
            kind: FieldKind::Choice {
                options: PROPERTY_STATUSES,
                message: None,
            },
        },
        Field {
            name: "limit",
            required: false,
            kind: FieldKind::Digits,
        },
        Field {
            name: "offset",
            required: false,
            kind: FieldKind::Digits,
        },
    ],
};
