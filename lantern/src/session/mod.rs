//! One tokio task per player. Packets from the server and the client, and
//! deferred work coming due, are events on a single channel, so the
//! inventory state never needs a lock.

use lantern_core::GameMode;
use lantern_inventory::{
    context::{DeferredAction, RecipeBook},
    InventoryCache, InventoryContext, WindowType,
};
use lantern_protocol::{bedrock, java};
use tokio::{
    sync::mpsc::{self, Receiver, Sender, WeakSender},
    task::JoinHandle,
};

use crate::error::{LanternError, SessionError};

mod tasks;

pub use tasks::DeferredTasks;

const EVENT_BUFFER: usize = 64;

pub enum Event {
    /// A container packet from the Java server.
    Java(java::client::Clientbound),
    /// An inventory packet from the Bedrock client.
    Bedrock(bedrock::server::Serverbound),
    Deferred { window_id: u8, action: DeferredAction },
    GameMode(GameMode),
    Recipes(RecipeBook),
}

/// Posts events to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    events: Sender<Event>,
}

impl SessionHandle {
    pub async fn send(&self, event: Event) -> Result<(), SessionError> {
        self.events
            .send(event)
            .await
            .map_err(|_| SessionError::ChannelClosed)
    }

    pub async fn java(&self, packet: impl Into<java::client::Clientbound>) -> Result<(), SessionError> {
        self.send(Event::Java(packet.into())).await
    }

    pub async fn bedrock(&self, packet: impl Into<bedrock::server::Serverbound>) -> Result<(), SessionError> {
        self.send(Event::Bedrock(packet.into())).await
    }
}

pub struct Session {
    cache: InventoryCache,
    ctx: InventoryContext,
    events: Receiver<Event>,
    /// Handed to deferred tasks; the session ends once every handle is gone.
    sender: WeakSender<Event>,
    tasks: DeferredTasks,
}

impl Session {
    /// Starts the session's event loop. It runs until every handle is dropped.
    pub fn spawn(cache: InventoryCache, ctx: InventoryContext) -> (SessionHandle, JoinHandle<()>) {
        let (sender, events) = mpsc::channel(EVENT_BUFFER);
        let session = Self {
            cache,
            ctx,
            events,
            sender: sender.downgrade(),
            tasks: DeferredTasks::default(),
        };
        let task = tokio::spawn(session.run());
        (SessionHandle { events: sender }, task)
    }

    async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            if let Err(error) = self.handle(event) {
                error.log();
            }
            self.schedule();
        }
        self.tasks.cancel_all();
        log::debug!("Inventory session ended");
    }

    fn handle(&mut self, event: Event) -> Result<(), SessionError> {
        match event {
            Event::Java(java::client::Clientbound::OpenScreen(open))
                if WindowType::from_menu_id(open.window_type).is_none() =>
            {
                return Err(SessionError::UnknownWindow(open.window_type));
            }
            Event::Java(packet) => self.cache.handle_java(&mut self.ctx, packet),
            Event::Bedrock(packet) => self.cache.handle_bedrock(&mut self.ctx, packet),
            Event::Deferred { window_id, action } => self.cache.run_deferred(&mut self.ctx, window_id, action),
            Event::GameMode(game_mode) => self.ctx.game_mode = game_mode,
            Event::Recipes(recipes) => self.ctx.recipes = recipes,
        }
        Ok(())
    }

    /// Drops work for closed windows, then starts timers for new work.
    fn schedule(&mut self) {
        for window_id in self.cache.take_closed() {
            self.tasks.cancel(window_id);
        }
        for deferred in self.ctx.take_deferred() {
            self.tasks.schedule(deferred, self.sender.clone());
        }
    }
}
