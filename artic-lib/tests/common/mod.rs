//! Local stand-in for the `/artworks` endpoint.

#![allow(dead_code)]

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde_json::json;
use tokio::net::TcpListener;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub query: String,
    pub page: u32,
}

type Handler = dyn Fn(&Seen) -> (u16, String) + Send + Sync;

/// Starts a server answering every request with `handler`.
///
/// Returns the base URL to hand to the client (`http://addr/api/v1`).
pub async fn spawn_server<F>(handler: F) -> String
where
    F: Fn(&Seen) -> (u16, String) + Send + Sync + 'static,
{
    spawn_server_with_delay(Duration::ZERO, handler).await
}

/// Like [`spawn_server`], sleeping `delay` before each response.
pub async fn spawn_server_with_delay<F>(delay: Duration, handler: F) -> String
where
    F: Fn(&Seen) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler: Arc<Handler> = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let handler = handler.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let handler = handler.clone();
                    async move {
                        let seen = seen(&req);
                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }
                        let (status, body) = handler(&seen);

                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .header("Content-Type", "application/json")
                                .body(Full::new(Bytes::from(body)))
                                .unwrap(),
                        )
                    }
                });

                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    format!("http://{}/api/v1", addr)
}

fn seen(req: &Request<Incoming>) -> Seen {
    let query = req.uri().query().unwrap_or_default().to_string();
    let page = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "page")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(1);

    Seen {
        path: req.uri().path().to_string(),
        query,
        page,
    }
}

/// A well-formed `/artworks` body for `page` of a `total`-record collection.
pub fn artworks_body(page: u32, total: u64) -> String {
    let limit = 12u64;
    let first = (page as u64 - 1) * limit;
    let data: Vec<_> = (first + 1..=(first + limit).min(total))
        .map(|id| {
            let origin = (id % 2 == 0).then_some("France");
            json!({
                "id": id,
                "title": format!("Work {id}"),
                "place_of_origin": origin,
                "artist_display": "Unknown",
                "inscriptions": null,
                "date_start": 1800 + id,
                "date_end": null
            })
        })
        .collect();

    json!({
        "pagination": {
            "total": total,
            "limit": limit,
            "offset": first,
            "total_pages": total.div_ceil(limit),
            "current_page": page
        },
        "data": data
    })
    .to_string()
}
