use anyhow::Context;
use as112_domain::DomainError;
use as112_infrastructure::dns::{As112RequestHandler, ZoneDispatcher};
use hickory_proto::op::Message;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

const RECV_BUFFER_SIZE: usize = 4096;

/// UDP socket and TCP listener bound to the same port, not yet serving.
pub struct DnsListeners {
    udp: UdpSocket,
    tcp: TcpListener,
    local_addr: SocketAddr,
}

impl DnsListeners {
    /// Bind both transports.
    ///
    /// With port 0 the TCP listener reuses the port the UDP socket obtained.
    pub fn bind(addr: SocketAddr) -> Result<Self, DomainError> {
        let domain = if addr.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };

        let udp = create_udp_socket(domain, addr).map_err(|e| bind_error("UDP", addr, e))?;
        let local_addr = udp.local_addr().map_err(|e| bind_error("UDP", addr, e))?;

        let tcp_addr = SocketAddr::new(addr.ip(), local_addr.port());
        let tcp =
            create_tcp_listener(domain, tcp_addr).map_err(|e| bind_error("TCP", tcp_addr, e))?;

        info!(bind_address = %local_addr, "DNS listeners bound (UDP + TCP)");

        Ok(Self {
            udp,
            tcp,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Spawn one task per transport; both share `dispatcher`.
    pub fn start(
        self,
        dispatcher: ZoneDispatcher,
        tcp_timeout: Duration,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let udp = Arc::new(self.udp);
        let udp_dispatcher = dispatcher.clone();
        tasks.spawn(async move { run_udp_listener(udp, udp_dispatcher).await });

        let mut server = ServerFuture::new(As112RequestHandler::new(dispatcher));
        server.register_listener(self.tcp, tcp_timeout);
        tasks.spawn(async move {
            server
                .block_until_done()
                .await
                .context("TCP listener stopped")
        });

        info!(address = %self.local_addr, "DNS listeners started");
        tasks
    }
}

async fn run_udp_listener(
    socket: Arc<UdpSocket>,
    dispatcher: ZoneDispatcher,
) -> anyhow::Result<()> {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let (len, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if is_transient(&e) => {
                debug!(error = %e, "Transient UDP recv error");
                continue;
            }
            Err(e) => return Err(e).context("UDP listener stopped"),
        };

        let datagram = recv_buf[..len].to_vec();
        let socket = Arc::clone(&socket);
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            handle_datagram(&socket, &dispatcher, &datagram, peer).await;
        });
    }
}

async fn handle_datagram(
    socket: &UdpSocket,
    dispatcher: &ZoneDispatcher,
    datagram: &[u8],
    peer: SocketAddr,
) {
    let query = match Message::from_vec(datagram) {
        Ok(query) => query,
        Err(e) => {
            debug!(client = %peer, error = %e, "Dropping unparseable datagram");
            return;
        }
    };

    let Some(response) = dispatcher.respond(&query) else {
        return;
    };

    let wire = match response.to_vec() {
        Ok(wire) => wire,
        Err(e) => {
            error!(client = %peer, error = %e, "Failed to encode response");
            return;
        }
    };

    if let Err(e) = socket.send_to(&wire, peer).await {
        warn!(client = %peer, error = %e, "Failed to send UDP response");
    }
}

// ICMP errors from earlier sends surface on the next recv.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::WouldBlock
    )
}

fn bind_error(transport: &'static str, addr: SocketAddr, e: io::Error) -> DomainError {
    DomainError::BindFailed {
        transport,
        address: addr.to_string(),
        reason: e.to_string(),
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
