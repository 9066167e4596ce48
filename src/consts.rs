pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Tunables for the API client, the initial load and the dashboard,
    //! grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channels carrying events and request completions.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up (milliseconds).
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// How long a notification stays in the status line (seconds).
    pub const NOTIFICATION_TTL_SECS: u64 = 5;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration
    pub mod network {
        /// Default per-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Connection timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 5;
    }

    /// Initial collection load retry configuration
    pub mod list_fetching {
        use std::time::Duration;

        /// Maximum number of attempts for the initial load
        pub const MAX_ATTEMPTS: u32 = 3;

        /// Delay between attempts when the server gives no hint (milliseconds)
        pub const RETRY_DELAY_MS: u64 = 1000;

        /// Upper bound on a server-provided retry delay (seconds)
        pub const MAX_SERVER_RETRY_SECS: u64 = 30;

        /// Helper function to get the default retry delay
        pub const fn retry_delay() -> Duration {
            Duration::from_millis(RETRY_DELAY_MS)
        }

        /// Helper function to get the retry delay cap
        pub const fn max_server_retry() -> Duration {
            Duration::from_secs(MAX_SERVER_RETRY_SECS)
        }
    }
}
