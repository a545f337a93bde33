use super::dispatch::{Route, ZoneDispatcher};
use super::response_builder::NegativeResponseBuilder;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use tracing::{debug, warn};

/// hickory-server handler answering reserved zones for stream transports.
#[derive(Clone)]
pub struct As112RequestHandler {
    dispatcher: ZoneDispatcher,
}

impl As112RequestHandler {
    pub fn new(dispatcher: ZoneDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait::async_trait]
impl RequestHandler for As112RequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = request.request_info();
        if let Err(e) = &request_info {
            debug!(error = %e, client = %request.src(), "Request without a single question");
        }
        let question = request_info.as_ref().ok().map(|info| info.query.name());

        let route = self.dispatcher.route_request(request.header(), question);
        let Some(code) = route.response_code() else {
            debug!(client = %request.src(), "Ignoring non-query message");
            return ResponseInfo::from(*request.header());
        };

        let Route::Zone { apex, soa } = route else {
            return send_error_response(request, &mut response_handle, code).await;
        };

        debug!(
            name = ?question,
            zone = %apex,
            client = %request.src(),
            "Answering with zone SOA"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = NegativeResponseBuilder::negative_header(request.header());
        let response = builder.build(
            header,
            &[] as &[Record],
            std::iter::once(soa),
            &[],
            &[],
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, client = %request.src(), "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            warn!(error = %e, client = %request.src(), "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
