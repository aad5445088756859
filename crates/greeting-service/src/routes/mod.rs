mod greeting;

pub use greeting::{greeting_routes, Greeting, GREETING_MESSAGE, VERSION};
