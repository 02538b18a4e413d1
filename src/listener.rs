// Design Choice: socket2 for socket construction so the receive buffer can
// be tuned before binding, tokio for the async receive loop.
use std::fmt;
use std::io;
use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;

use crate::config::ListenerConfig;
use crate::error::ListenError;

/// Maximum UDP payload; one receive buffer of this size lives for the
/// listener's lifetime.
pub const MAX_DATAGRAM: usize = 65_535;

const RECV_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// One datagram as it arrived: raw payload bytes plus the sender address.
/// Created per receive, dropped after printing.
pub struct Datagram {
    pub payload: Vec<u8>,
    pub peer: SocketAddr,
}

impl fmt::Display for Datagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Received {} bytes from {}", self.payload.len(), self.peer)?;
        write!(f, "Data: b\"{}\"", self.payload.escape_ascii())
    }
}

/// The probe itself: owns the bound socket for the process lifetime and
/// reports every datagram that arrives at it.
#[derive(Debug)]
pub struct Listener {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl Listener {
    /// Binds a fresh IPv4 datagram socket to the configured endpoint.
    ///
    /// No SO_REUSEADDR: a second probe on the same endpoint must fail,
    /// not silently share the port.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenError> {
        let sock =
            Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)).map_err(ListenError::Bind)?;
        sock.set_recv_buffer_size(RECV_BUFFER_SIZE)
            .map_err(ListenError::Bind)?;
        sock.set_nonblocking(true).map_err(ListenError::Bind)?;
        sock.bind(&config.socket_addr().into())
            .map_err(ListenError::Bind)?;

        let socket = UdpSocket::from_std(sock.into()).map_err(ListenError::Bind)?;
        Ok(Self {
            socket,
            buf: vec![0u8; MAX_DATAGRAM],
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Waits for the next datagram. The only suspension point in the
    /// program; any receive failure is fatal to the caller.
    pub async fn recv(&mut self) -> Result<Datagram, ListenError> {
        let (len, peer) = self
            .socket
            .recv_from(&mut self.buf)
            .await
            .map_err(ListenError::Recv)?;
        Ok(Datagram {
            payload: self.buf[..len].to_vec(),
            peer,
        })
    }

    /// Receive loop: print each datagram's size, sender, and raw bytes.
    /// Never returns Ok; runs until the process is interrupted or a
    /// receive fails.
    pub async fn run(&mut self) -> Result<(), ListenError> {
        loop {
            let datagram = self.recv().await?;
            println!("{datagram}");
        }
    }
}
