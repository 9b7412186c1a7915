pub mod shared {
    pub mod infrastructure {
        pub mod item_store {
            pub mod in_memory;
        }
    }
}

pub mod modules {
    pub mod inventory {
        pub mod core {
            pub mod errors;
            pub mod item;
        }
        pub mod use_cases {
            pub mod get_item {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_item {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod item_store;
            }
        }
    }
}

pub mod shell;
