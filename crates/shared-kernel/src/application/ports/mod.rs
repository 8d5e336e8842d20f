mod message_consumer;

pub use message_consumer::{MessageConsumer, MessageHandler};
