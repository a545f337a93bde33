//! Query helpers shared by listener and lifecycle tests.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;

const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn query(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message
}

pub async fn udp_exchange(addr: SocketAddr, request: &Message) -> Message {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client
        .send_to(&request.to_vec().unwrap(), addr)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (len, _) = timeout(REPLY_TIMEOUT, client.recv_from(&mut buf))
        .await
        .expect("no reply over UDP")
        .unwrap();
    Message::from_vec(&buf[..len]).unwrap()
}

pub async fn tcp_exchange(addr: SocketAddr, request: &Message) -> Message {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let bytes = request.to_vec().unwrap();
    stream
        .write_all(&(bytes.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&bytes).await.unwrap();

    let mut len = [0u8; 2];
    timeout(REPLY_TIMEOUT, stream.read_exact(&mut len))
        .await
        .expect("no reply over TCP")
        .unwrap();
    let mut buf = vec![0u8; u16::from_be_bytes(len) as usize];
    stream.read_exact(&mut buf).await.unwrap();
    Message::from_vec(&buf).unwrap()
}
