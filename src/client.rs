use log::{debug, warn};
use rand::Rng;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::UdpSocket;

use crate::address_family::bind_for;
use crate::build_query;
use crate::codec::{self, Header, Name, Question, Response, ResponseCode};

/// Largest response accepted, the classic UDP limit without EDNS
pub const MAX_UDP_PAYLOAD: usize = 512;

/// Error resolving a name through [`Client`]
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Codec(#[from] codec::Error),
    #[error("resolver replied with a query instead of a response")]
    NotAResponse,
    #[error("resolver replied {0}")]
    ServerError(ResponseCode),
    #[error("resolver answered for {got} instead of {expected}")]
    QuestionMismatch { expected: Name, got: Name },
}

/// A UDP socket connected to a single recursive resolver
///
/// There are no retries and no timeouts, wrap the returned futures in
/// `tokio::time::timeout` when a lookup must not hang.
pub struct Client {
    socket: UdpSocket,
    server: SocketAddr,
}

impl Client {
    // Will panic if called from outside the context of a runtime
    pub async fn connect(server: SocketAddr) -> io::Result<Client> {
        let socket = UdpSocket::from_std(bind_for(&server)?)?;
        socket.connect(server).await?;
        debug!("bound {:?} for resolver {}", socket.local_addr(), server);

        Ok(Client { socket, server })
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Looks up the A records of `domain`
    pub async fn query(&self, domain: &str) -> Result<Response, LookupError> {
        let packet = build_query(domain, &mut rand::thread_rng())?;
        self.exchange(&packet).await
    }

    /// Same as [`Client::query`] with the transaction id drawn from `rng`
    pub async fn query_with_rng<R: Rng>(
        &self,
        domain: &str,
        rng: &mut R,
    ) -> Result<Response, LookupError> {
        let packet = build_query(domain, rng)?;
        self.exchange(&packet).await
    }

    async fn exchange(&self, packet: &[u8]) -> Result<Response, LookupError> {
        let (sent, offset) = Header::parse(packet, 0)?;
        let (asked, _) = Question::parse(packet, offset)?;
        debug!("sending query {} to {}", sent.id, self.server);
        let bytes_sent = self.socket.send(packet).await?;
        if bytes_sent != packet.len() {
            warn!("failed to send entire packet");
        }

        let mut recv_buf = [0u8; MAX_UDP_PAYLOAD];
        loop {
            let len = self.socket.recv(&mut recv_buf).await?;
            let buffer = &recv_buf[..len];

            let header = match Header::parse(buffer, 0) {
                Ok((header, _)) => header,
                Err(error) => {
                    warn!("couldn't parse packet from {}: {}", self.server, error);
                    continue;
                }
            };
            if header.id != sent.id {
                warn!(
                    "dropping packet {} from {} while waiting for {}",
                    header.id, self.server, sent.id
                );
                continue;
            }
            if header.query {
                return Err(LookupError::NotAResponse);
            }
            if header.truncated {
                warn!("response {} from {} is truncated", header.id, self.server);
            }
            if header.response_code != ResponseCode::NoError {
                return Err(LookupError::ServerError(header.response_code));
            }

            let response = Response::parse(buffer)?;
            if !response.question.qname.matches(&asked.qname) {
                return Err(LookupError::QuestionMismatch {
                    expected: asked.qname,
                    got: response.question.qname,
                });
            }
            debug!(
                "received {} answers for {} from {}",
                response.answers.len(),
                response.question.qname,
                self.server
            );
            return Ok(response);
        }
    }
}
