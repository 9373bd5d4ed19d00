use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use finder_logging::{finder_info, finder_warn};

use crate::{ClientEvent, ClientSettings, Recommender, ReqwestRecommender, RequestId};

enum ClientCommand {
    Submit { request: RequestId, message: String },
}

/// Handle to the request worker.
///
/// Commands are executed on a dedicated thread running a tokio runtime; each
/// submission becomes one request task, and completions come back on the
/// event channel in whatever order the server answers.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Mutex<mpsc::Receiver<ClientEvent>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let recommender = Arc::new(ReqwestRecommender::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let recommender = recommender.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(recommender.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn submit(&self, request: RequestId, message: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            request,
            message: message.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    recommender: &dyn Recommender,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { request, message } => {
            finder_info!("Submit request={} message_len={}", request, message.len());
            let result = recommender.recommend(request, &message).await;
            if let Err(err) = &result {
                finder_warn!("request {} failed: {}", request, err);
            }
            let _ = event_tx.send(ClientEvent::Completed { request, result });
        }
    }
}
