use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

pub enum Inet {}

pub enum Inet6 {}

pub trait AddressFamily {
    type Addr: Into<IpAddr>;

    const ANY_ADDR: Self::Addr;

    const DOMAIN: Domain;

    fn udp_socket() -> io::Result<Socket> {
        Socket::new(Self::DOMAIN, Type::DGRAM, Some(Protocol::UDP))
    }

    /// Binds a non-blocking socket to an ephemeral port
    fn bind() -> io::Result<UdpSocket> {
        let addr: SockAddr = SocketAddr::new(Self::ANY_ADDR.into(), 0).into();
        let socket = Self::udp_socket()?;
        socket.set_nonblocking(true)?;
        socket.bind(&addr)?;
        Ok(socket.into())
    }
}

impl AddressFamily for Inet {
    type Addr = Ipv4Addr;

    const ANY_ADDR: Self::Addr = Ipv4Addr::UNSPECIFIED;

    const DOMAIN: Domain = Domain::IPV4;
}

impl AddressFamily for Inet6 {
    type Addr = Ipv6Addr;

    const ANY_ADDR: Self::Addr = Ipv6Addr::UNSPECIFIED;

    const DOMAIN: Domain = Domain::IPV6;

    fn udp_socket() -> io::Result<Socket> {
        let socket = Socket::new(Self::DOMAIN, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_only_v6(true)?;
        Ok(socket)
    }
}

/// Binds a socket of the same family as `server`
pub fn bind_for(server: &SocketAddr) -> io::Result<UdpSocket> {
    match server {
        SocketAddr::V4(_) => Inet::bind(),
        SocketAddr::V6(_) => Inet6::bind(),
    }
}
