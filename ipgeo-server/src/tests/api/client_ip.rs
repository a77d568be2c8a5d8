use crate::api::extractors::client_ip::resolve_client_ip;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::{HeaderMap, HeaderValue};
use googletest::prelude::*;

fn peer(a: u8, b: u8, c: u8, d: u8) -> Option<IpAddr> {
    Some(SocketAddr::from(([a, b, c, d], 54321)).ip())
}

#[test]
fn given_ip_header_then_override_wins_over_everything() {
    let mut headers = HeaderMap::new();
    headers.insert("ip", HeaderValue::from_static("9.9.9.9"));
    headers.insert("x-forwarded-for", HeaderValue::from_static("5.6.7.8"));

    let resolved = resolve_client_ip(&headers, peer(127, 0, 0, 1), &[IpAddr::V4(Ipv4Addr::LOCALHOST)]);

    assert_that!(resolved.as_deref(), some(eq("9.9.9.9")));
}

#[test]
fn given_trusted_peer_then_first_forwarded_address_is_used() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-forwarded-for",
        HeaderValue::from_static("5.6.7.8, 10.0.0.1"),
    );

    let resolved = resolve_client_ip(&headers, peer(127, 0, 0, 1), &[IpAddr::V4(Ipv4Addr::LOCALHOST)]);

    assert_that!(resolved.as_deref(), some(eq("5.6.7.8")));
}

#[test]
fn given_untrusted_peer_then_forwarded_header_is_ignored() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("5.6.7.8"));

    let resolved = resolve_client_ip(&headers, peer(203, 0, 113, 7), &[IpAddr::V4(Ipv4Addr::LOCALHOST)]);

    assert_that!(resolved.as_deref(), some(eq("203.0.113.7")));
}

#[test]
fn given_no_override_and_no_proxy_then_peer_address_is_used() {
    let headers = HeaderMap::new();

    let resolved = resolve_client_ip(&headers, peer(203, 0, 113, 7), &[]);

    assert_that!(resolved.as_deref(), some(eq("203.0.113.7")));
}

#[test]
fn given_nothing_to_go_on_then_none() {
    let headers = HeaderMap::new();

    let resolved = resolve_client_ip(&headers, None, &[]);

    assert_that!(resolved, none());
}

#[test]
fn given_blank_ip_header_then_falls_through_to_peer() {
    let mut headers = HeaderMap::new();
    headers.insert("ip", HeaderValue::from_static("  "));

    let resolved = resolve_client_ip(&headers, peer(203, 0, 113, 7), &[]);

    assert_that!(resolved.as_deref(), some(eq("203.0.113.7")));
}
