//! Request/reply lifecycle scenarios against an in-memory transport.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use prost::Message;

use mercury_client::config::MetadataSection;
use mercury_client::metadata::image::ImageProto;
use mercury_client::metadata::{image_decoder, metadata_decoders, Metadata, IMAGE_CONTENT_TYPE};
use mercury_client::{
    Collector, DecoderRegistry, Decoders, FnObserver, LogicalRequest, Operation, Outcome,
    RecordingTransport, Reply,
};
use mercury_core::error::MercuryError;
use mercury_core::{Envelope, MultiEnvelope, MGET_REPLY, MGET_REQUEST};

fn tagged() -> Decoders<String> {
    Decoders::single(|b: &[u8]| Ok(format!("decoded:{}", String::from_utf8_lossy(b))))
}

fn reply(content_type: &str, status: i32, body: &[u8]) -> Reply {
    Reply::new(Envelope::reply(content_type, status).to_bytes(), body.to_vec())
}

fn batch(decoders: Decoders<String>) -> Operation<String> {
    let reqs = vec![
        LogicalRequest::get("hm://metadata/3/track/a"),
        LogicalRequest::get("hm://metadata/3/track/b"),
    ];
    Operation::new("mget", reqs, decoders, Some(LogicalRequest::default())).unwrap()
}

#[test]
fn scenario_a_single_request_success() {
    let op = Operation::new(
        "lookup",
        vec![LogicalRequest::get("spotify:track:1").with_method("")],
        tagged(),
        None,
    )
    .unwrap();

    let transport = RecordingTransport::new();
    op.submit(7, &transport).unwrap();
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].seq, 7);
    assert_eq!(sent[0].method_code, 0);
    assert_eq!(sent[0].to_values().len(), 2);
    assert_eq!(Envelope::from_base64(&sent[0].header).unwrap().uri(), "spotify:track:1");

    let out = Collector::new();
    op.process(&reply("application/vnd.foo", 0, b"b"), &out);
    assert_eq!(out.take(), vec![Outcome::Success("decoded:b".to_string())]);
}

#[test]
fn scenario_b_batch_builds_three_arguments() {
    let op = batch(tagged());
    assert_eq!(op.payload().unwrap().len(), 2);
    assert_eq!(op.request().content_type(), MGET_REQUEST);

    let args = op.build(3);
    let values = args.to_values();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], serde_json::json!(0));

    let payload = MultiEnvelope::from_base64(values[2].as_str().unwrap()).unwrap();
    let uris: Vec<&str> = payload.requests.iter().map(|e| e.uri()).collect();
    assert_eq!(uris, vec!["hm://metadata/3/track/a", "hm://metadata/3/track/b"]);
}

#[test]
fn scenario_c_client_error_skips_body() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let dec: Decoders<()> = Decoders::single(move |_: &[u8]| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], dec, None).unwrap();

    let out = Collector::new();
    op.process(&reply("application/vnd.foo", 404, b"body"), &out);

    let got = out.take();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].kind(), "client-error");
    assert_eq!(
        got[0].failure(),
        Some(&MercuryError::Client { code: 404, message: "Not Found".into() })
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn server_error_and_unknown_reason() {
    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], tagged(), None).unwrap();
    let out = Collector::new();

    op.process(&reply("", 503, b""), &out);
    op.process(&reply("", 599, b""), &out);
    op.process(&reply("", 451, b""), &out);

    assert_eq!(
        out.take(),
        vec![
            Outcome::Failure(MercuryError::Server { code: Some(503), message: "Service Unavailable".into() }),
            Outcome::Failure(MercuryError::Server { code: Some(599), message: "Unknown Error".into() }),
            Outcome::Failure(MercuryError::Client { code: 451, message: "Unknown Error".into() }),
        ]
    );
}

#[test]
fn status_400_and_600_are_decoded() {
    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], tagged(), None).unwrap();
    let out = Collector::new();
    op.process(&reply("a", 400, b"1"), &out);
    op.process(&reply("a", 600, b"2"), &out);
    assert_eq!(
        out.take(),
        vec![
            Outcome::Success("decoded:1".to_string()),
            Outcome::Success("decoded:2".to_string()),
        ]
    );
}

#[test]
fn scenario_d_batch_mismatch_warns_then_dispatches() {
    let op = batch(tagged());
    let out = Collector::new();
    op.process(&reply("application/vnd.foo", 200, b"x"), &out);

    let got = out.take();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].kind(), "server-error");
    assert!(matches!(got[0].failure(), Some(MercuryError::Server { code: None, .. })));
    assert_eq!(got[1], Outcome::Success("decoded:x".to_string()));
}

#[test]
fn batch_with_mget_reply_has_no_warning() {
    let op = batch(tagged());
    let out = Collector::new();
    op.process(&reply(MGET_REPLY, 200, b""), &out);
    let kinds: Vec<&str> = out.take().iter().map(|o| o.kind()).collect();
    assert_eq!(kinds, vec!["not-implemented"]);
}

#[test]
fn scenario_e_unrecognized_type() {
    let reg = DecoderRegistry::new().with("vnd.known", |_: &[u8]| Ok("known".to_string()));
    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], reg.into(), None).unwrap();

    let out = Collector::new();
    op.process(&reply("vnd.other", 200, b""), &out);

    let got = out.take();
    assert_eq!(got, vec![Outcome::Failure(MercuryError::UnrecognizedType("vnd.other".into()))]);
    assert_eq!(got[0].kind(), "unrecognized-type");
}

#[test]
fn method_codes_on_the_wire() {
    for (req, code) in [
        (LogicalRequest::subscribe("hm://x"), 1),
        (LogicalRequest::unsubscribe("hm://x"), 2),
        (LogicalRequest::get("hm://x"), 0),
        (LogicalRequest::get("hm://x").with_method("POST"), 0),
    ] {
        let op = Operation::new("m", vec![req], tagged(), None).unwrap();
        assert_eq!(op.build(1).method_code, code);
    }
}

#[test]
fn batch_method_code_follows_header() {
    let reqs = vec![LogicalRequest::get("a"), LogicalRequest::get("b")];
    let header = LogicalRequest::default().with_method("SUB");
    let op = Operation::new("m", reqs, tagged(), Some(header)).unwrap();
    assert_eq!(op.build(1).method_code, 1);
}

#[test]
fn keyed_metadata_decodes_image() {
    let cfg = MetadataSection { resource_host: "i.example.net".into() };
    let op = Operation::new(
        "image",
        vec![LogicalRequest::get("hm://metadata/3/image/abcd")],
        metadata_decoders(&cfg).into(),
        None,
    )
    .unwrap();

    let body = ImageProto {
        file_id: Some(vec![0xab, 0xcd]),
        size: Some(2),
        width: Some(300),
        height: Some(300),
    }
    .encode_to_vec();

    let out = Collector::new();
    op.process(&reply(IMAGE_CONTENT_TYPE, 200, &body), &out);

    let Some(Metadata::Image(img)) = out.take().pop().and_then(Outcome::success) else {
        panic!("expected image");
    };
    assert_eq!(img.file_url.as_deref(), Some("https://i.example.net/300/abcd"));
}

#[test]
fn single_image_decoder_ignores_content_type() {
    let op = Operation::new(
        "image",
        vec![LogicalRequest::get("hm://x")],
        image_decoder(&MetadataSection::default()),
        None,
    )
    .unwrap();
    let out = Collector::new();
    op.process(&reply("whatever", 200, &[]), &out);
    let img = out.take().pop().and_then(Outcome::success).unwrap();
    assert!(img.file_uri.is_none());
}

#[test]
fn closure_observer() {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let observer = FnObserver(move |o: Outcome<String>| {
        assert!(o.is_success());
        c.fetch_add(1, Ordering::SeqCst);
    });

    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], tagged(), None).unwrap();
    op.process(&reply("a", 200, b""), &observer);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn channel_observer_across_tasks() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], tagged(), None).unwrap();

    let handle = tokio::spawn(async move {
        op.process(&reply("a", 200, b"z"), &tx);
    });
    handle.await.unwrap();

    let outcome = rx.recv().await.unwrap();
    assert_eq!(outcome, Outcome::Success("decoded:z".to_string()));
    assert!(rx.recv().await.is_none());
}

#[test]
fn closed_channel_drops_outcome_quietly() {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Outcome<String>>();
    drop(rx);

    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], tagged(), None).unwrap();
    op.process(&reply("a", 200, b"z"), &tx);
    op.process(&reply("", 404, b""), &tx);
    assert!(tx.is_closed());
}

#[test]
fn base64_reply_round_trip() {
    let header = Envelope::reply("application/vnd.foo", 0).to_base64();
    let reply = Reply::from_base64(&header, "Ym9keQ==").unwrap();
    assert_eq!(&reply.body[..], b"body");

    let op = Operation::new("lookup", vec![LogicalRequest::get("x")], tagged(), None).unwrap();
    let out = Collector::new();
    op.process(&reply, &out);
    assert_eq!(out.take(), vec![Outcome::Success("decoded:body".to_string())]);
}

#[test]
fn base64_reply_rejects_bad_parts() {
    let header = Envelope::reply("", 0).to_base64();

    let err = Reply::from_base64("not base64!", "Ym9keQ==").unwrap_err();
    assert_eq!(err.code().as_str(), "DECODE");

    let err = Reply::from_base64(&header, "%%%").unwrap_err();
    assert_eq!(err.code().as_str(), "DECODE");
}
