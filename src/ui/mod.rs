pub mod app;
pub mod clock;
pub mod coordinator;
pub mod counter;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod page;
pub mod pointer;
pub mod render;
pub mod runtime;
pub mod sections;
pub mod slides;
pub mod terminal_guard;
pub mod theme;
pub mod typewriter;
pub mod visibility;
