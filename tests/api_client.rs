use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vibelist::api::{ApiError, HttpPlaylistClient, PlaylistApi};

/// Serves exactly one canned HTTP response and hands back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(split) = text.find("\r\n\r\n") {
            let length = text[..split]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= split + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_posts_genre_and_returns_songs_in_order() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"playlist":[{"title":"Essence","artist":"Wizkid"},{"title":"Last Last","artist":"Burna Boy"}]}"#,
    )
    .await;

    let client = HttpPlaylistClient::new(&format!("{base_url}/")).unwrap();
    let songs = client.generate_song_list("Afrobeats").await.unwrap();

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].title, "Essence");
    assert_eq!(songs[0].artist, "Wizkid");
    assert_eq!(songs[1].title, "Last Last");
    assert_eq!(songs[1].artist, "Burna Boy");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /generate_song_list/ HTTP/1.1"), "{request}");
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"genre":"Afrobeats"}"#), "{request}");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    let client = HttpPlaylistClient::new(&base_url).unwrap();
    let result = client.generate_song_list("Jazz").await;

    assert!(matches!(result, Err(ApiError::Status { status: 500 })));
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let (base_url, server) = serve_once("200 OK", r#"{"songs":[]}"#).await;

    let client = HttpPlaylistClient::new(&base_url).unwrap();
    let result = client.generate_song_list("Pop").await;

    assert!(matches!(result, Err(ApiError::Malformed(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_empty_playlist_is_not_an_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"playlist":[]}"#).await;

    let client = HttpPlaylistClient::new(&base_url).unwrap();
    let songs = client.generate_song_list("Country").await.unwrap();

    assert!(songs.is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Grab a free port, then close it again
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpPlaylistClient::new(&format!("http://{addr}")).unwrap();
    let result = client.generate_song_list("Reggae").await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
}
