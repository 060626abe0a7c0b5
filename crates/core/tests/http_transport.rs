use gesture_core::{
    Controller, ControllerState, DetectionTransport, DetectorConfig, HttpTransport, MediaFile,
    TransportError, DETECTION_FAILED_MESSAGE,
};
use mockito::{Matcher, Server};

fn transport_for(server: &Server) -> HttpTransport {
    let config = DetectorConfig::default().with_endpoint(format!("{}/predict", server.url()));
    HttpTransport::new(&config).expect("build transport")
}

fn clip() -> MediaFile {
    MediaFile::new("clip.mp4", "video/mp4", b"fake-video-bytes".to_vec())
}

#[tokio::test]
async fn posts_video_as_multipart_frame_field() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/predict")
        .match_header("content-type", Matcher::Regex("^multipart/form-data; boundary=".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="frame""#.into()),
            Matcher::Regex(r#"filename="clip.mp4""#.into()),
            Matcher::Regex("(?i)content-type: video/mp4".into()),
            Matcher::Regex("fake-video-bytes".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result":"turn-left"}"#)
        .create_async()
        .await;

    let response = transport_for(&server).detect(&clip()).await.expect("detect");
    mock.assert_async().await;
    assert_eq!(response.result, "turn-left");
}

#[tokio::test]
async fn uses_configured_field_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/predict")
        .match_body(Matcher::Regex(r#"name="video""#.into()))
        .with_status(200)
        .with_body(r#"{"result":"stop"}"#)
        .create_async()
        .await;

    let mut config = DetectorConfig::default().with_endpoint(format!("{}/predict", server.url()));
    config.field_name = "video".into();
    let transport = HttpTransport::new(&config).unwrap();

    transport.detect(&clip()).await.expect("detect");
    mock.assert_async().await;
}

#[tokio::test]
async fn extra_response_fields_are_ignored() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(r#"{"result":"slow-down","confidence":0.93}"#)
        .create_async()
        .await;

    let response = transport_for(&server).detect(&clip()).await.unwrap();
    assert_eq!(response.result, "slow-down");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/predict").with_status(500).create_async().await;

    let err = transport_for(&server).detect(&clip()).await.unwrap_err();
    assert!(matches!(err, TransportError::Status(500)));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = transport_for(&server).detect(&clip()).await.unwrap_err();
    assert!(matches!(err, TransportError::MalformedResponse(_)));
}

#[tokio::test]
async fn missing_result_field_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(r#"{"label":"stop"}"#)
        .create_async()
        .await;

    let err = transport_for(&server).detect(&clip()).await.unwrap_err();
    assert!(matches!(err, TransportError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config =
        DetectorConfig::default().with_endpoint(format!("http://127.0.0.1:{port}/predict"));
    let transport = HttpTransport::new(&config).unwrap();

    let err = transport.detect(&clip()).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}

#[tokio::test]
async fn controller_scenario_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": "turn-left"}"#)
        .create_async()
        .await;
    let transport = transport_for(&server);

    let mut controller = Controller::new();
    controller.select_file(MediaFile::new("clip.mp4", "video/mp4", b"v".to_vec())).unwrap();
    assert_eq!(controller.state(), ControllerState::FileSelected);
    assert!(controller.preview().is_some());

    let ticket = controller.begin_detection().expect("submit");
    assert_eq!(controller.state(), ControllerState::Submitting);
    assert!(!controller.can_submit());

    let result = transport.detect(ticket.media()).await;
    controller.complete_detection(ticket, result);
    assert_eq!(controller.state(), ControllerState::ResultReady);
    assert_eq!(controller.label().as_deref(), Some("Turn Left"));
}

#[tokio::test]
async fn controller_scenario_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("POST", "/predict").with_status(500).create_async().await;
    let transport = transport_for(&server);

    let mut controller = Controller::new();
    controller.select_file(MediaFile::new("clip.mp4", "video/mp4", b"v".to_vec())).unwrap();
    let preview = controller.preview().unwrap().to_string();

    assert!(controller.detect(&transport).await);
    assert_eq!(controller.state(), ControllerState::SubmissionFailed);
    assert_eq!(controller.error(), Some(DETECTION_FAILED_MESSAGE));
    assert_eq!(controller.preview(), Some(preview.as_str()));
    assert!(controller.registry().resolve(&preview).is_some());
}
