use crate::animation::interface::Animator;
use crate::config::Config;
use crate::display::interface::Display;
use crate::file_reader::interface::FileReader;
use crate::library::logger::interface::Logger;
use crate::predict_client::interface::PredictClient;
use crate::upload_predict::core::{init, transition, Event};
use crate::upload_predict::render::Render;
use crate::upload_predict::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

pub struct UploadPredict {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    display: Arc<Mutex<dyn Display + Send + Sync>>,
    render: Render,
    run_effect: RunEffect,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
}

impl UploadPredict {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        animator: Arc<dyn Animator + Send + Sync>,
        file_reader: Arc<dyn FileReader + Send + Sync>,
        predict_client: Arc<dyn PredictClient + Send + Sync>,
        display: Arc<Mutex<dyn Display + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("upload_predict");

        Self {
            render: Render::new(display.clone(), animator, config.clone()),
            run_effect: RunEffect::new(
                config.clone(),
                logger.clone(),
                file_reader,
                predict_client,
                event_sender.clone(),
            ),
            config,
            logger,
            display,
            event_sender,
            event_receiver,
        }
    }

    #[allow(dead_code)]
    pub fn event_sender(&self) -> Sender<Event> {
        self.event_sender.clone()
    }

    /// Runs until a `Shutdown` event is processed.
    pub fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.display
            .lock()
            .map_err(|e| e.to_string())?
            .init(self.event_sender.clone())?;

        let (mut current, effects) = init();
        self.render.render(&current)?;
        self.run_effect.dispatch(effects);

        while !current.closed {
            let event = self.event_receiver.recv()?;
            let quiet = event.is_tick();

            if !quiet {
                let _ = self.logger.info(&format!("event: {:?}", event));
            }

            let (next, effects) = transition(&self.config, current, event);

            if !quiet {
                let _ = self.logger.info(&format!("effects: {:?}", effects));
            }

            current = next;
            self.render.render(&current)?;
            self.run_effect.dispatch(effects);
        }

        let _ = self.logger.info("Closed");

        Ok(())
    }
}
