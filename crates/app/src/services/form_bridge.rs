//! Form bridge — submits the device, group and color forms to the API.

use ledbridge_domain::error::SubmitError;
use ledbridge_domain::form::{ColorForm, DeviceForm, GroupForm};
use ledbridge_domain::form_kind::FormKind;
use ledbridge_domain::outcome::SubmitOutcome;
use serde::Serialize;

use crate::ports::{ApiClient, FieldSource, Notifier, ReadForm};

/// Application service translating form submissions into API calls.
///
/// Every submission performs exactly one `POST`, always completes, and ends
/// with exactly one [`Notifier::notify`] call. Submissions are independent;
/// several may be in flight at once with no ordering between them.
pub struct FormBridge<C, N> {
    client: C,
    notifier: N,
}

impl<C: ApiClient, N: Notifier> FormBridge<C, N> {
    /// Create a new bridge sending requests through `client` and reporting
    /// outcomes to `notifier`.
    pub fn new(client: C, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// Submit the "add device" form.
    #[tracing::instrument(skip_all, fields(device_name = %form.name))]
    pub async fn submit_device(&self, form: DeviceForm) -> SubmitOutcome {
        self.submit(DeviceForm::KIND, &form.into_payload()).await
    }

    /// Submit the "add group" form.
    #[tracing::instrument(skip_all, fields(group_name = %form.name))]
    pub async fn submit_group(&self, form: GroupForm) -> SubmitOutcome {
        self.submit(GroupForm::KIND, &form.into_payload()).await
    }

    /// Submit the "set color" form.
    #[tracing::instrument(skip_all, fields(group_name = %form.group))]
    pub async fn submit_color(&self, form: ColorForm) -> SubmitOutcome {
        self.submit(ColorForm::KIND, &form.into_payload()).await
    }

    /// Read the device form from `fields` and submit it.
    pub async fn submit_device_from(&self, fields: &impl FieldSource) -> SubmitOutcome {
        self.submit_device(DeviceForm::read(fields)).await
    }

    /// Read the group form from `fields` and submit it.
    pub async fn submit_group_from(&self, fields: &impl FieldSource) -> SubmitOutcome {
        self.submit_group(GroupForm::read(fields)).await
    }

    /// Read the color form from `fields` and submit it.
    pub async fn submit_color_from(&self, fields: &impl FieldSource) -> SubmitOutcome {
        self.submit_color(ColorForm::read(fields)).await
    }

    /// Read and submit the form of the given kind.
    pub async fn submit_from(&self, kind: FormKind, fields: &impl FieldSource) -> SubmitOutcome {
        match kind {
            FormKind::Device => self.submit_device_from(fields).await,
            FormKind::Group => self.submit_group_from(fields).await,
            FormKind::Color => self.submit_color_from(fields).await,
        }
    }

    async fn submit<P: Serialize>(&self, kind: FormKind, payload: &P) -> SubmitOutcome {
        let outcome = SubmitOutcome::from((kind, self.dispatch(kind, payload).await));
        match outcome.error() {
            None => tracing::info!(form = %kind, "submission accepted"),
            Some(err) => tracing::warn!(form = %kind, error = %err, "submission failed"),
        }
        self.notifier.notify(&outcome);
        outcome
    }

    async fn dispatch<P: Serialize>(&self, kind: FormKind, payload: &P) -> Result<(), SubmitError> {
        let body =
            serde_json::to_value(payload).map_err(|err| SubmitError::Encode(err.to_string()))?;
        let response = self.client.post_json(kind.path(), body).await?;
        response.into_json::<serde_json::Value>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ApiResponse;
    use ledbridge_domain::error::TransportError;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    /// What the stub collaborator answers.
    #[derive(Clone)]
    enum Reply {
        Status(u16, &'static str),
        Unreachable(&'static str),
    }

    struct StubClient {
        reply: Reply,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl StubClient {
        fn replying(reply: Reply) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(String, Value)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl ApiClient for StubClient {
        fn post_json(
            &self,
            path: &str,
            body: Value,
        ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
            self.requests.lock().unwrap().push((path.to_string(), body));
            let reply = self.reply.clone();
            async move {
                tokio::task::yield_now().await;
                match reply {
                    Reply::Status(status, body) => Ok(ApiResponse::new(status, body)),
                    Reply::Unreachable(message) => Err(TransportError::new(message)),
                }
            }
        }

        fn get(&self, _path: &str) -> impl Future<Output = Result<ApiResponse, TransportError>> {
            async { Ok(ApiResponse::new(200, "[]")) }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, outcome: &SubmitOutcome) {
            self.messages.lock().unwrap().push(outcome.message());
        }
    }

    fn ok_client() -> StubClient {
        StubClient::replying(Reply::Status(200, r#"{"status": "ok"}"#))
    }

    fn device_form() -> DeviceForm {
        DeviceForm {
            name: "porch".to_string(),
            ip: "192.168.1.40".to_string(),
            port: "6454".to_string(),
            pixels: "60".to_string(),
        }
    }

    #[tokio::test]
    async fn should_post_device_payload_to_devices_path() {
        let client = ok_client();
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let outcome = bridge.submit_device(device_form()).await;

        assert!(outcome.is_success());
        assert_eq!(
            client.requests(),
            vec![(
                "/devices".to_string(),
                json!({"name": "porch", "ip": "192.168.1.40", "port": 6454, "pixels": 60})
            )]
        );
        assert_eq!(notifier.messages(), vec!["Device added"]);
    }

    #[tokio::test]
    async fn should_post_split_device_names_to_groups_path() {
        let client = ok_client();
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        bridge
            .submit_group(GroupForm {
                name: "desk".to_string(),
                devices: "a, b ,c".to_string(),
            })
            .await;

        assert_eq!(
            client.requests(),
            vec![(
                "/groups".to_string(),
                json!({"name": "desk", "devices": ["a", "b", "c"]})
            )]
        );
        assert_eq!(notifier.messages(), vec!["Group added"]);
    }

    #[tokio::test]
    async fn should_post_color_payload_to_color_path() {
        let client = ok_client();
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        bridge
            .submit_color(ColorForm {
                group: "desk".to_string(),
                r: "255".to_string(),
                g: "128".to_string(),
                b: "0".to_string(),
            })
            .await;

        assert_eq!(
            client.requests(),
            vec![(
                "/color".to_string(),
                json!({"group": "desk", "r": 255, "g": 128, "b": 0})
            )]
        );
        assert_eq!(notifier.messages(), vec!["Color set"]);
    }

    #[tokio::test]
    async fn should_send_request_with_null_when_number_is_not_numeric() {
        let client = ok_client();
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let mut form = device_form();
        form.port = "abc".to_string();
        bridge.submit_device(form).await;

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1["port"], Value::Null);
        assert_eq!(requests[0].1["pixels"], json!(60));
    }

    #[tokio::test]
    async fn should_report_rejected_body_in_failure_message() {
        let client = StubClient::replying(Reply::Status(400, "bad ip"));
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let outcome = bridge.submit_device(device_form()).await;

        assert!(!outcome.is_success());
        assert!(matches!(
            outcome.error(),
            Some(SubmitError::Rejected { status: 400, .. })
        ));
        assert_eq!(notifier.messages(), vec!["Error adding device: bad ip"]);
    }

    #[tokio::test]
    async fn should_ignore_success_body_content() {
        let client = StubClient::replying(Reply::Status(201, "[1, 2, 3]"));
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let outcome = bridge.submit_group(GroupForm::default()).await;

        assert!(outcome.is_success());
        assert_eq!(notifier.messages(), vec!["Group added"]);
    }

    #[tokio::test]
    async fn should_fail_when_success_body_is_not_json() {
        let client = StubClient::replying(Reply::Status(200, "OK"));
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let outcome = bridge.submit_color(ColorForm::default()).await;

        assert!(matches!(outcome.error(), Some(SubmitError::Decode(_))));
        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Error setting color: "));
    }

    #[tokio::test]
    async fn should_report_transport_failure() {
        let client = StubClient::replying(Reply::Unreachable("connection refused"));
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let outcome = bridge.submit_group(GroupForm::default()).await;

        assert!(matches!(outcome.error(), Some(SubmitError::Transport(_))));
        assert_eq!(
            notifier.messages(),
            vec!["Error adding group: connection refused"]
        );
    }

    #[tokio::test]
    async fn should_read_fields_at_submission_time() {
        let client = ok_client();
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let mut fields = HashMap::new();
        fields.insert("color-group".to_string(), "desk".to_string());
        fields.insert("color-r".to_string(), "1".to_string());
        bridge.submit_from(FormKind::Color, &fields).await;

        fields.insert("color-r".to_string(), "2".to_string());
        bridge.submit_color_from(&fields).await;

        let requests = client.requests();
        assert_eq!(requests[0].1["r"], json!(1));
        assert_eq!(requests[1].1["r"], json!(2));
        assert_eq!(requests[1].1["g"], Value::Null);
    }

    #[tokio::test]
    async fn should_run_concurrent_submissions_independently() {
        let client = ok_client();
        let notifier = RecordingNotifier::default();
        let bridge = FormBridge::new(&client, &notifier);

        let (device, group) = tokio::join!(
            bridge.submit_device(device_form()),
            bridge.submit_group(GroupForm::default()),
        );

        assert!(device.is_success());
        assert!(group.is_success());
        assert_eq!(client.requests().len(), 2);
        let mut messages = notifier.messages();
        messages.sort();
        assert_eq!(messages, vec!["Device added", "Group added"]);
    }
}
