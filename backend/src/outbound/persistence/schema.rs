//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered readers.
    users (id) {
        id -> Uuid,
        /// Unique login name (max 150 characters).
        username -> Varchar,
        /// `salt$hex` SHA-256 digest.
        password_digest -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Published news items.
    news (id) {
        id -> Int8,
        title -> Varchar,
        text -> Text,
        date -> Date,
    }
}

diesel::table! {
    /// Reader comments; rows cascade with their news item and author.
    comments (id) {
        id -> Int8,
        news_id -> Int8,
        author_id -> Uuid,
        text -> Text,
        created -> Timestamptz,
    }
}

diesel::joinable!(comments -> news (news_id));
diesel::joinable!(comments -> users (author_id));

diesel::allow_tables_to_appear_in_same_query!(comments, news, users);
