use crate::classification_widget::core::{init, transition, Effect, Event, State};
use crate::classification_widget::run_effect::RunEffect;
use crate::config::Config;
use crate::image_classifier::interface::ModelLoader;
use crate::library::logger::interface::Logger;
use crate::object_url::interface::ObjectUrlStore;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Owns the widget state. Only the owning thread runs transitions; effects run on
/// worker threads and report back through the event channel.
pub struct ClassificationWidget {
    state: State,
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
}

impl ClassificationWidget {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_loader: Arc<dyn ModelLoader + Send + Sync>,
        object_urls: Arc<dyn ObjectUrlStore + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("classification_widget");
        let run_effect = RunEffect::new(
            logger.with_namespace("effect"),
            model_loader,
            object_urls,
            event_sender,
        );
        let (state, effects) = init();

        let widget = Self {
            state,
            config,
            logger,
            run_effect,
            event_receiver,
        };
        widget.spawn_effects(effects);
        widget
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dispatch(&mut self, event: Event) {
        let old_state = std::mem::take(&mut self.state);

        self.logger.debug(&format!(
            "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
            old_state, event
        ));

        let (new_state, effects) = transition(&self.config, old_state, event);

        self.logger.debug(&format!(
            "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state, effects
        ));

        self.state = new_state;
        self.spawn_effects(effects);
    }

    /// Applies every event that has already arrived. Never blocks.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            processed += 1;
        }
        processed
    }

    /// Waits up to `timeout` for one event and applies it.
    #[cfg(test)]
    pub fn process_next(&mut self, timeout: std::time::Duration) -> bool {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(_) => false,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
