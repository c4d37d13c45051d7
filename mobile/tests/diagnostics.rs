//! Diagnostic events emitted while wiring and using the mobile.
//!
//! Every test records events through its own thread local subscriber.

use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use mobile::{
    config::MobileConfig,
    module::{build_device, wire_charger},
    ComputeUnit, DeviceScreen, MobileApplication, PowerDelivery, PowerSource,
};
use mobile_config::ConfigProvider;
use tracing::{
    field::{Field, Visit},
    span::{Attributes, Id},
    Event, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    Layer,
};

/// Collects the message of every event and the tag of its enclosing span
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(String, Option<String>)>>>,
}
impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    fn count(&self, message: &str) -> usize {
        self.messages().iter().filter(|m| *m == message).count()
    }

    fn tag_of(&self, message: &str) -> Option<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|(m, _)| m == message)
            .and_then(|(_, tag)| tag.clone())
    }
}

/// Tag recorded on a span
struct Tag(String);

impl<S> Layer<S> for Recorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);
        if let (Some(tag), Some(span)) = (visitor.tag, ctx.span(id)) {
            span.extensions_mut().insert(Tag(tag));
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let tag = ctx.event_scope(event).and_then(|scope| {
            scope.from_root().find_map(|span| {
                let tag = span.extensions().get::<Tag>().map(|tag| tag.0.clone());
                tag
            })
        });

        self.events
            .lock()
            .unwrap()
            .push((visitor.message, tag.or(visitor.tag)));
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    tag: Option<String>,
}
impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "tag" => self.tag = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

fn recorded<R>(f: impl FnOnce() -> R) -> (R, Recorder) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, recorder)
}

fn app() -> MobileApplication {
    let mut configs = ConfigProvider::new();
    configs.add_config(MobileConfig::default()).unwrap();
    MobileApplication::new(configs)
}

#[test]
fn leaf_construction_emits_one_event_each() {
    let (_, recorder) = recorded(|| {
        let _ = PowerSource::new();
        let _ = ComputeUnit::new();
        let _ = PowerDelivery::new();
    });

    assert_eq!(
        recorder.messages(),
        vec![
            "Battery constructed",
            "Processor constructed",
            "Charger constructed",
        ]
    );
}

#[test]
fn perform_action_emits_one_event_per_call() {
    let device = build_device(Arc::new(PowerSource::new()), Arc::new(ComputeUnit::new()));

    let (_, recorder) = recorded(|| {
        device.perform_action();
        device.perform_action();
        device.perform_action();
    });

    assert_eq!(recorder.messages(), vec!["Mobile action performed"; 3]);
}

#[test]
fn manual_wiring_scenario() {
    let (_, recorder) = recorded(|| {
        let b1 = Arc::new(PowerSource::new());
        let p1 = Arc::new(ComputeUnit::new());
        let m1 = build_device(b1.clone(), p1.clone());
        let c1 = PowerDelivery::new();

        wire_charger(&m1, &c1);
        m1.perform_action();

        assert!(Arc::ptr_eq(m1.power_source(), &b1));
        assert!(Arc::ptr_eq(m1.compute_unit(), &p1));
    });

    assert_eq!(
        recorder.messages(),
        vec![
            "Battery constructed",
            "Processor constructed",
            "Mobile constructed",
            "Charger constructed",
            "Charger associated with mobile",
            "Mobile action performed",
        ]
    );
}

#[test]
fn screen_creation_builds_each_part_once() {
    let (result, recorder) = recorded(|| {
        let mut screen = DeviceScreen::new();
        let result = screen.on_create(&app(), None);
        screen.on_destroy();
        result
    });

    assert!(result.is_ok());
    for message in [
        "Battery constructed",
        "Processor constructed",
        "Mobile constructed",
        "Charger constructed",
        "Charger associated with mobile",
        "Mobile action performed",
    ] {
        assert_eq!(recorder.count(message), 1, "{message}");
    }

    let messages = recorder.messages();
    let position = |message: &str| messages.iter().position(|m| m == message).unwrap();
    assert!(position("Battery constructed") < position("Mobile constructed"));
    assert!(position("Processor constructed") < position("Mobile constructed"));
    assert!(position("Mobile constructed") < position("Charger constructed"));
    assert!(position("Charger constructed") < position("Charger associated with mobile"));
    assert!(position("Charger associated with mobile") < position("Mobile action performed"));
}

#[test]
fn failed_graph_never_constructs_a_mobile() {
    let (result, recorder) = recorded(|| {
        let app = app().with_module(|builder| {
            builder
                .bind(mobile::module::PowerSourceProvider)
                .bind(mobile::module::DeviceProvider)
        });
        DeviceScreen::new().on_create(&app, None)
    });

    assert!(result.is_err());
    assert_eq!(recorder.count("Battery constructed"), 0);
    assert_eq!(recorder.count("Mobile constructed"), 0);
    assert_eq!(recorder.count("Mobile action performed"), 0);
}

#[test]
fn component_events_carry_the_configured_tag() {
    let (result, recorder) = recorded(|| {
        let mut configs = ConfigProvider::new();
        configs
            .add_config(MobileConfig {
                tag: "Pixel".to_string(),
            })
            .unwrap();
        DeviceScreen::new().on_create(&MobileApplication::new(configs), None)
    });

    assert!(result.is_ok());
    for message in [
        "Battery constructed",
        "Processor constructed",
        "Mobile constructed",
        "Charger constructed",
        "Charger associated with mobile",
        "Mobile action performed",
    ] {
        assert_eq!(recorder.tag_of(message).as_deref(), Some("Pixel"), "{message}");
    }
}

#[test]
fn parts_built_outside_a_graph_carry_no_tag() {
    let (_, recorder) = recorded(PowerSource::new);

    assert_eq!(recorder.tag_of("Battery constructed"), None);
}
