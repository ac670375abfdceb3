use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::{
    domain::weather::{ForecastReport, Place},
    resilience::sequence::Token,
};

/// Everything the orchestrator reacts to. Background tasks only ever
/// produce these; state is mutated exclusively while handling them.
#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    SearchDebounced {
        token: Token,
    },
    SuggestionsReady {
        token: Token,
        places: Vec<Place>,
    },
    FetchSucceeded {
        cycle: Token,
        place: Place,
        report: ForecastReport,
    },
    FetchFailed {
        cycle: Token,
        error: String,
    },
    CommentaryResolved {
        cycle: Token,
        text: Option<String>,
    },
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
