//! The serial transport loop.
//!
//! The transceiver's serial port is expected behind a TCP bridge (ser2net
//! or similar); the gateway connects to the bridge and feeds whatever
//! chunking the socket delivers into the frame codec. Corrupt frames are
//! logged and the stream resynchronizes on the next sync byte.

use std::sync::Arc;

use enohub_device::TelegramDispatcher;
use esp3_protocol::FrameCodec;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Size of one socket read.
const READ_CHUNK: usize = 1024;

/// Connect to the serial bridge and pump packets into the dispatcher
/// until the stream ends or shutdown is signalled.
pub async fn run(
    endpoint: &str,
    dispatcher: Arc<TelegramDispatcher>,
    mut shutdown: watch::Receiver<bool>,
) -> std::io::Result<()> {
    let mut stream = TcpStream::connect(endpoint).await?;
    info!(endpoint, "connected to serial bridge");

    let mut codec = FrameCodec::new();
    let mut buf = [0u8; READ_CHUNK];

    loop {
        let n = tokio::select! {
            _ = shutdown.changed() => {
                info!("shutdown requested, closing transport");
                return Ok(());
            }
            result = stream.read(&mut buf) => result?,
        };
        if n == 0 {
            info!("serial bridge closed the connection");
            return Ok(());
        }

        codec.push(&buf[..n]);
        drain_codec(&mut codec, &dispatcher);
    }
}

/// Decode and dispatch every packet currently buffered in the codec.
fn drain_codec(codec: &mut FrameCodec, dispatcher: &TelegramDispatcher) {
    loop {
        match codec.next_packet() {
            Ok(Some(packet)) => match dispatcher.handle_packet(&packet) {
                Ok(outcome) => debug!(?outcome, "packet handled"),
                Err(error) => warn!(%error, "packet dropped"),
            },
            Ok(None) => return,
            Err(error) => warn!(%error, "corrupt frame, resynchronizing"),
        }
    }
}
