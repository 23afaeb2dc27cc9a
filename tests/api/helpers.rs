use once_cell::sync::Lazy;
use rescue_forms::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const ORGANIZATION_EMAIL: &str = "info@enosi-ethelonton.gr";

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub newsletter_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_json(&self, route: &str, body: &Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{route}", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, route: &str, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}{route}", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Answers every email api call with `status`, expecting `times` calls.
    pub async fn email_api_responds(&self, status: u16, times: u64) {
        Mock::given(path("/emails"))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.email_server)
            .await;
    }

    /// JSON bodies of every email the app sent, in order.
    pub async fn sent_emails(&self) -> Vec<Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawns the app against mock email and newsletter apis, letting the test
/// tweak the settings first.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;
    let newsletter_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.app.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.timeout_ms = 1000;
        c.organization.email = ORGANIZATION_EMAIL.to_string().try_into().unwrap();
        c.newsletter.provider = None;
        c.newsletter.sender.api_url = format!("{}/v2/subscribers", newsletter_server.uri());
        configure(&mut c);
        c
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", app.get_port());
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        email_server,
        newsletter_server,
        api_client: reqwest::Client::new(),
    }
}

/// Removes `field` from a JSON object payload.
pub fn without(mut payload: Value, field: &str) -> Value {
    payload.as_object_mut().unwrap().remove(field);
    payload
}

/// Replaces `field` in a JSON object payload.
pub fn with(mut payload: Value, field: &str, value: Value) -> Value {
    payload[field] = value;
    payload
}

pub fn adoption_payload() -> Value {
    json!({
        "fullName": "Μαρία Παπαδοπούλου",
        "email": "maria@example.com",
        "phone": "6912345678",
        "address": "Αγγελή Γοβιού 12",
        "city": "Χαλκίδα",
        "housingType": "house",
        "hasYard": "yes",
        "hadPetsBefore": "yes",
        "currentPets": "",
        "workSchedule": "Εργάζομαι από το σπίτι",
        "whoWillCare": "Εγώ και ο σύζυγός μου",
        "whyAdopt": "Θέλουμε να δώσουμε ένα ζεστό σπίτι σε ένα ζωάκι.",
        "agreeToHomeVisit": true,
        "agreeToFollowUp": true,
        "agreeToTerms": true,
        "animalId": "rex-2026",
        "animalName": "Ρεξ",
        "submittedAt": "2026-10-19T13:52:07.000Z"
    })
}

pub fn foster_payload() -> Value {
    json!({
        "fullName": "Νίκος Γεωργίου",
        "email": "nikos@example.com",
        "phone": "6987654321",
        "address": "Ελευθερίου Βενιζέλου 3",
        "city": "Χαλκίδα",
        "housingType": "apartment",
        "hasYard": "no",
        "fosterDuration": "2-3months",
        "preferredTypes": ["kittens", "senior-cats"],
        "canHandleMedical": "depends",
        "canTransport": "sometimes",
        "hadPetsBefore": "yes",
        "currentPets": "Μία γάτα",
        "fosteredBefore": "yes",
        "workSchedule": "Πρωινή βάρδια",
        "whyFoster": "Θέλω να βοηθήσω μέχρι να βρεθεί μόνιμο σπίτι.",
        "agreeToReturnAnimal": true,
        "agreeToFollowGuidelines": true,
        "agreeToTerms": true,
        "submittedAt": "2026-10-19T08:00:00Z"
    })
}

pub fn volunteer_payload() -> Value {
    json!({
        "fullName": "Ελένη Κωνσταντίνου",
        "email": "eleni@example.com",
        "phone": "2221012345",
        "age": "26-35",
        "city": "Ψαχνά",
        "availability": ["saturday", "sunday"],
        "hoursPerWeek": "3-5",
        "interests": ["photography", "admin"],
        "hasExperience": "no",
        "experience": "",
        "whyVolunteer": "Αγαπώ τα ζώα και θέλω να βοηθήσω όπου χρειάζεται.",
        "skills": "Φωτογραφία",
        "agreeToTerms": true,
        "submittedAt": "2026-10-19T10:00:00Z"
    })
}

pub fn contact_payload() -> Value {
    json!({
        "name": "Maria",
        "email": "maria@example.com",
        "subject": "adoption",
        "message": "I would like information about adopting a dog.",
        "submittedAt": "2026-10-19T13:52:07.000Z"
    })
}
