//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. Diesel
//! quotes identifiers, so the reserved `order` table name is safe to use.

diesel::table! {
    /// Marketplace participants, both customers and executors.
    #[sql_name = "user"]
    users (id) {
        id -> Integer,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
        age -> Nullable<Integer>,
        email -> Nullable<Text>,
        role -> Nullable<Text>,
        phone -> Nullable<Text>,
    }
}

diesel::table! {
    /// Jobs posted by customers.
    #[sql_name = "order"]
    orders (id) {
        id -> Integer,
        name -> Nullable<Text>,
        description -> Nullable<Text>,
        start_date -> Nullable<Date>,
        end_date -> Nullable<Date>,
        address -> Nullable<Text>,
        price -> Nullable<Integer>,
        /// References `user.id`; not enforced.
        customer_id -> Nullable<Integer>,
        /// References `user.id`; not enforced.
        executor_id -> Nullable<Integer>,
    }
}

diesel::table! {
    /// Executor bids on orders.
    #[sql_name = "offer"]
    offers (id) {
        id -> Integer,
        /// References `order.id`; not enforced.
        order_id -> Nullable<Integer>,
        /// References `user.id`; not enforced.
        executor_id -> Nullable<Integer>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, orders, offers);
