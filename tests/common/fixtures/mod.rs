//! Sample chat messages and records used across the integration tests

/// A free-form `/add` message.
pub const ADD_MESSAGE: &str = "/add that dream heist movie with leo";

/// A free-form `/search` message.
pub const SEARCH_MESSAGE: &str = "/search the pixar balloon one";

/// A free-form `/delete` message.
pub const DELETE_MESSAGE: &str = "/delete the pixar balloon one";

pub const INCEPTION: &str = "Inception (2010)";
pub const UP: &str = "Up (2009)";
