// Composition root for the inventory service.
//
// - Read config from environment.
// - Instantiate the item store and wire it into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
