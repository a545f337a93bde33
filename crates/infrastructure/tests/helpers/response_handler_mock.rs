use hickory_proto::op::Message;
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinDecodable, BinEncoder};
use hickory_proto::xfer::Protocol;
use hickory_server::authority::{MessageRequest, MessageResponse};
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Wrap a query message as a hickory-server request arriving over TCP.
pub fn tcp_request(query: &Message) -> Request {
    let bytes = query.to_vec().unwrap();
    let message = MessageRequest::from_bytes(&bytes).unwrap();
    let src: SocketAddr = "127.0.0.1:53000".parse().unwrap();
    Request::new(message, src, Protocol::Tcp)
}

/// Keeps every response it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingResponseHandler {
    sent: Arc<Mutex<Vec<Message>>>,
}

impl RecordingResponseHandler {
    pub fn sent(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ResponseHandler for RecordingResponseHandler {
    async fn send_response<'a>(
        &mut self,
        response: MessageResponse<
            '_,
            'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
        >,
    ) -> io::Result<ResponseInfo> {
        let mut bytes = Vec::with_capacity(512);
        let info = {
            let mut encoder = BinEncoder::new(&mut bytes);
            response
                .destructive_emit(&mut encoder)
                .map_err(io::Error::other)?
        };

        let message = Message::from_vec(&bytes).map_err(io::Error::other)?;
        self.sent.lock().unwrap().push(message);
        Ok(info)
    }
}

/// Fails every write, like a peer that has already gone away.
#[derive(Clone, Default)]
pub struct FailingResponseHandler {
    attempts: Arc<Mutex<usize>>,
}

impl FailingResponseHandler {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ResponseHandler for FailingResponseHandler {
    async fn send_response<'a>(
        &mut self,
        _response: MessageResponse<
            '_,
            'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
        >,
    ) -> io::Result<ResponseInfo> {
        *self.attempts.lock().unwrap() += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection closed"))
    }
}
