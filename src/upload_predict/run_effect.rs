use crate::config::Config;
use crate::file_reader::interface::FileReader;
use crate::library::logger::interface::Logger;
use crate::library::timer::TimerRegistry;
use crate::predict_client::interface::PredictClient;
use crate::upload_predict::core::{Effect, Event, Timer};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    file_reader: Arc<dyn FileReader + Send + Sync>,
    predict_client: Arc<dyn PredictClient + Send + Sync>,
    timers: Arc<Mutex<TimerRegistry<Timer>>>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        file_reader: Arc<dyn FileReader + Send + Sync>,
        predict_client: Arc<dyn PredictClient + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("run_effect"),
            file_reader,
            predict_client,
            timers: Arc::new(Mutex::new(TimerRegistry::new())),
            event_sender,
        }
    }

    /// Timer bookkeeping happens in order on the caller's thread; anything
    /// that blocks gets its own thread.
    pub fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            if is_blocking(&effect) {
                let run_effect = self.clone();
                std::thread::spawn(move || run_effect.run_effect(effect));
            } else {
                self.run_effect(effect);
            }
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.event_sender.send(Event::Tick(Instant::now())).is_err() {
                    break;
                }
            },
            Effect::ReadFile { file } => {
                let result = self.file_reader.read(&file);
                let _ = self.event_sender.send(Event::FileRead { file, result });
            }
            Effect::RequestPrediction { file } => {
                let result = self.predict_client.predict(&file);
                let _ = self.event_sender.send(Event::PredictionDone(result));
            }
            Effect::StartTimer {
                timer,
                generation,
                delay,
            } => {
                let event_sender = self.event_sender.clone();
                self.timers().start(timer, delay, move || {
                    let _ = event_sender.send(Event::TimerFired { timer, generation });
                });
            }
            Effect::CancelTimer { timer } => {
                self.timers().cancel(&timer);
            }
            Effect::CancelAllTimers => {
                self.timers().cancel_all();
            }
            Effect::LogError { message } => {
                let _ = self.logger.error(&message);
            }
        }
    }

    fn timers(&self) -> MutexGuard<'_, TimerRegistry<Timer>> {
        match self.timers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn is_blocking(effect: &Effect) -> bool {
    matches!(
        effect,
        Effect::SubscribeTick | Effect::ReadFile { .. } | Effect::RequestPrediction { .. }
    )
}
