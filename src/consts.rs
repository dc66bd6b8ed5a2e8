/// Database file looked up in the working directory when no --db is given
pub(crate) const DEFAULT_DB_FILE: &str = "conference_sessions.db";

/// Fixed local port for the static file server
pub(crate) const DEFAULT_SERVE_PORT: u16 = 8000;
