use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use finder_client::{ClientEvent, ClientHandle, ClientSettings};
use finder_core::{Effect, Msg, Recommendation, TravelWindow};
use finder_logging::{finder_info, finder_warn};

pub struct EffectRunner {
    client: Arc<ClientHandle>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let client = Arc::new(ClientHandle::new(settings.clone()));
        let runner = Self { client };
        runner.spawn_event_loop(settings, msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitQuery { request, message } => {
                    finder_info!(
                        "SubmitQuery request={} message_len={}",
                        request,
                        message.len()
                    );
                    self.client.submit(request, message);
                }
            }
        }
    }

    fn spawn_event_loop(&self, settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                if msg_tx.send(map_event(event, &settings)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ClientEvent, settings: &ClientSettings) -> Msg {
    match event {
        ClientEvent::Completed { request, result } => match result {
            Ok(recommendation) => Msg::RecommendationArrived {
                request,
                recommendation: map_recommendation(recommendation),
            },
            Err(err) => {
                finder_warn!("request {} failed: {}", request, err);
                Msg::RecommendationFailed {
                    request,
                    message: err.user_message(settings),
                }
            }
        },
    }
}

fn map_recommendation(wire: finder_client::Recommendation) -> Recommendation {
    Recommendation {
        destinations: wire.destinations,
        duration_days: wire.duration_days,
        best_window: TravelWindow {
            start_date: wire.best_window.start_date,
            end_date: wire.best_window.end_date,
            score: wire.best_window.score,
            reasons: wire.best_window.reasons,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_client::{FailureKind, RecommendError};

    fn wire_recommendation() -> finder_client::Recommendation {
        finder_client::Recommendation {
            destinations: vec!["Coorg".to_string(), "Sakleshpur".to_string()],
            duration_days: 5,
            best_window: finder_client::TravelWindow {
                start_date: "2024-11-10".to_string(),
                end_date: "2024-11-15".to_string(),
                score: 8.0,
                reasons: vec!["Cool weather".to_string(), "Low rainfall".to_string()],
            },
        }
    }

    #[test]
    fn completion_maps_to_arrived_message() {
        let settings = ClientSettings::default();
        let event = ClientEvent::Completed {
            request: 3,
            result: Ok(wire_recommendation()),
        };

        let msg = map_event(event, &settings);

        match msg {
            Msg::RecommendationArrived {
                request,
                recommendation,
            } => {
                assert_eq!(request, 3);
                assert_eq!(recommendation.destinations, vec!["Coorg", "Sakleshpur"]);
                assert_eq!(recommendation.best_window.score, 8.0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn server_detail_becomes_the_failure_message() {
        let settings = ClientSettings::default();
        let event = ClientEvent::Completed {
            request: 4,
            result: Err(RecommendError {
                kind: FailureKind::HttpStatus {
                    status: 404,
                    detail: Some("No valid window found".to_string()),
                },
                message: "404 Not Found".to_string(),
            }),
        };

        assert_eq!(
            map_event(event, &settings),
            Msg::RecommendationFailed {
                request: 4,
                message: "No valid window found".to_string(),
            }
        );
    }

    #[test]
    fn transport_failure_becomes_the_connect_hint() {
        let settings = ClientSettings::default();
        let event = ClientEvent::Completed {
            request: 5,
            result: Err(RecommendError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            }),
        };

        assert_eq!(
            map_event(event, &settings),
            Msg::RecommendationFailed {
                request: 5,
                message: settings.connect_hint(),
            }
        );
    }
}
