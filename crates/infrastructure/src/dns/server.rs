use crate::dns::wire::to_wire_record;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use sqlzone_application::ports::{QueryBackend, ResolutionOutcome};
use sqlzone_domain::QueryType;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Serves DNS requests by delegating to the configured query backend.
/// Once a backend answers, the reply is authoritative; a `NotMine`
/// outcome is refused since there is no next handler in a standalone
/// deployment.
#[derive(Clone)]
pub struct DnsServerHandler {
    backend: Arc<dyn QueryBackend>,
}

impl DnsServerHandler {
    pub fn new(backend: Arc<dyn QueryBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let qname = query.name().to_utf8();
        let qclass = query.query_class();
        let client_ip = request.src().ip();

        let qtype = match QueryType::from_u16(u16::from(query.query_type())) {
            Some(qt) => qt,
            None => {
                warn!(record_type = ?query.query_type(), "Unsupported query type");
                return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                    .await;
            }
        };

        info!(qname = %qname, qtype = %qtype, client = %client_ip, "DNS query received");

        let outcome = match self.backend.resolve(&qname, qtype, u16::from(qclass)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(qname = %qname, error = %e, "Query resolution failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let (answers, authority) = match outcome {
            ResolutionOutcome::NotMine => {
                debug!(qname = %qname, "Not authoritative for query, refusing");
                return send_error_response(request, &mut response_handle, ResponseCode::Refused)
                    .await;
            }
            ResolutionOutcome::Answered { answers, authority } => (answers, authority),
        };

        let to_wire = |rr: &sqlzone_domain::ResourceRecord| match to_wire_record(rr, qclass) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(name = %rr.name, error = %e, "Dropping record that failed wire conversion");
                None
            }
        };
        let answers: Vec<Record> = answers.iter().filter_map(to_wire).collect();
        // Authority-only SOA data rides in the Additional section.
        let extras: Vec<Record> = authority.iter().filter_map(to_wire).collect();

        debug!(qname = %qname, answers = answers.len(), extras = extras.len(), "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        let response = builder.build(header, answers.iter(), &[] as &[Record], &[], extras.iter());

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
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
    let mut header = *request.header();
    header.set_response_code(code);
    let response = builder.build(header, &[], &[] as &[Record], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
