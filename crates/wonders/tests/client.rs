//! Integration tests for the client counterpart against a scripted server.

use wonders::prelude::*;
use wonders::LineListener;

/// Binds on a random port and returns a connected (server, client) pair.
async fn stream_pair() -> (LineStream, LineStream) {
    let listener = LineListener::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = listener.local_addr().expect("should have local addr");

    let (server, client) =
        tokio::join!(listener.accept(), LineStream::connect(addr));
    (
        server.expect("should accept"),
        client.expect("should connect"),
    )
}

#[tokio::test]
async fn test_client_prints_text_and_answers_input() {
    let (server, stream) = stream_pair().await;
    let mut client = Client::new(&b"a\nno\n"[..], Vec::new());

    let script = async {
        send_text(&server, "Welcome!\nThe word is: ***").await.unwrap();
        let first = request_input(&server).await.unwrap();
        send_text(&server, "Again?").await.unwrap();
        let second = request_input(&server).await.unwrap();
        server.close().await;
        (first, second)
    };

    let (end, (first, second)) = tokio::join!(client.run(&stream), script);

    assert_eq!(end.unwrap(), ClientEnd::ServerClosed);
    assert_eq!(first, "a");
    assert_eq!(second, "no");

    let (_, output) = client.into_parts();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Welcome!\nThe word is: ***\nAgain?\n"
    );
}

#[tokio::test]
async fn test_client_ignores_unknown_control_commands() {
    let (server, stream) = stream_pair().await;
    let mut client = Client::new(&b"x\n"[..], Vec::new());

    let script = async {
        send_frame(
            &server,
            &Frame::Control(ControlCommand::Other("beep".into())),
        )
        .await
        .unwrap();
        // A control frame whose name is not UTF-8 is skipped as well.
        server.send(b"\0\xff\n").await.unwrap();
        send_text(&server, "after").await.unwrap();
        let reply = request_input(&server).await.unwrap();
        server.close().await;
        reply
    };

    let (end, reply) = tokio::join!(client.run(&stream), script);

    assert_eq!(end.unwrap(), ClientEnd::ServerClosed);
    assert_eq!(reply, "x");
    let (_, output) = client.into_parts();
    assert_eq!(output, b"after\n");
}

#[tokio::test]
async fn test_client_sends_empty_answer_for_empty_input_line() {
    let (server, stream) = stream_pair().await;
    let mut client = Client::new(&b"\r\n"[..], Vec::new());

    let script = async {
        let reply = request_input(&server).await.unwrap();
        server.close().await;
        reply
    };

    let (end, reply) = tokio::join!(client.run(&stream), script);
    assert_eq!(end.unwrap(), ClientEnd::ServerClosed);
    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_client_stops_when_local_input_ends() {
    let (server, stream) = stream_pair().await;
    let mut client = Client::new(&b""[..], Vec::new());

    let script = async {
        send_frame(&server, &Frame::input()).await.unwrap();
    };

    let (end, ()) = tokio::join!(client.run(&stream), script);
    assert_eq!(end.unwrap(), ClientEnd::InputClosed);
}

#[tokio::test]
async fn test_client_treats_server_drop_mid_line_as_disconnect() {
    let (server, stream) = stream_pair().await;
    let mut client = Client::new(&b""[..], Vec::new());

    let script = async {
        server.send(b"half a li").await.unwrap();
        server.close().await;
    };

    let (end, ()) = tokio::join!(client.run(&stream), script);
    assert_eq!(end.unwrap(), ClientEnd::ServerClosed);
    let (_, output) = client.into_parts();
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_run_client_reports_refused_connection() {
    let addr = {
        let listener = LineListener::bind("127.0.0.1:0")
            .await
            .expect("should bind");
        listener.local_addr().expect("local addr")
    };

    let err = wonders::run_client(addr).await.expect_err("refused");
    assert!(matches!(
        err,
        WondersError::Transport(wonders::TransportError::ConnectFailed(_))
    ));
}
