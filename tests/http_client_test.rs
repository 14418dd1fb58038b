// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use mockito::Matcher;
use osdsctl::{ClientConf, HttpVolumeClient, OsdsError, VolumeClient, VolumeSpec};
use serde_json::json;

const VOLUMES_PATH: &str = "/v1beta/t1/block/volumes";

fn client_for(server: &mockito::ServerGuard) -> HttpVolumeClient {
    let conf = ClientConf {
        endpoint: server.url(),
        tenant_id: "t1".to_string(),
        ..Default::default()
    };
    HttpVolumeClient::new(&conf).expect("client should build")
}

fn volume_body() -> serde_json::Value {
    json!({
        "id": "vol-1",
        "createdAt": "2017-10-24T15:04:05",
        "name": "foo",
        "description": "bar",
        "size": 100,
        "availabilityZone": "az1",
        "status": "creating",
        "poolId": "pool-1",
        "profileId": "p1"
    })
}

#[tokio::test]
async fn test_create_volume_posts_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", VOLUMES_PATH)
        .match_body(Matcher::Json(json!({
            "name": "foo",
            "description": "bar",
            "size": 100,
            "availabilityZone": "az1",
            "profileId": "p1"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(volume_body().to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let request = VolumeSpec {
        name: "foo".to_string(),
        description: "bar".to_string(),
        size: 100,
        availability_zone: "az1".to_string(),
        profile_id: "p1".to_string(),
        ..Default::default()
    };

    let volume = client.create_volume(&request).await.unwrap();
    assert_eq!(volume.id, "vol-1");
    assert_eq!(volume.status, "creating");
    assert_eq!(volume.pool_id, "pool-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_volume() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1beta/t1/block/volumes/vol-1")
        .with_status(200)
        .with_body(volume_body().to_string())
        .create_async()
        .await;

    let volume = client_for(&server).get_volume("vol-1").await.unwrap();
    assert_eq!(volume.name, "foo");
    assert_eq!(volume.size, 100);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_volumes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", VOLUMES_PATH)
        .with_status(200)
        .with_body(json!([volume_body(), {"id": "vol-2", "size": 5}]).to_string())
        .create_async()
        .await;

    let volumes = client_for(&server).list_volumes().await.unwrap();
    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[1].id, "vol-2");
    assert_eq!(volumes[1].name, "");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_volumes_null_body_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", VOLUMES_PATH)
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let volumes = client_for(&server).list_volumes().await.unwrap();
    assert!(volumes.is_empty());
}

#[tokio::test]
async fn test_delete_volume_sends_profile() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1beta/t1/block/volumes/vol-1")
        .match_body(Matcher::Json(json!({"profileId": "p1"})))
        .with_status(202)
        .create_async()
        .await;

    let request = VolumeSpec {
        profile_id: "p1".to_string(),
        ..Default::default()
    };
    client_for(&server)
        .delete_volume("vol-1", &request)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_volume_puts_partial_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1beta/t1/block/volumes/vol-1")
        .match_body(Matcher::Json(json!({"name": "renamed"})))
        .with_status(200)
        .with_body(json!({"id": "vol-1", "name": "renamed"}).to_string())
        .create_async()
        .await;

    let request = VolumeSpec {
        name: "renamed".to_string(),
        ..Default::default()
    };
    let volume = client_for(&server)
        .update_volume("vol-1", &request)
        .await
        .unwrap();
    assert_eq!(volume.name, "renamed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_uses_message_from_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1beta/t1/block/volumes/missing")
        .with_status(404)
        .with_body(json!({"code": 404, "message": "Volume missing not found"}).to_string())
        .create_async()
        .await;

    let err = client_for(&server).get_volume("missing").await.unwrap_err();
    match err {
        OsdsError::Http {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Volume missing not found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_response_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1beta/t1/block/volumes/vol-1")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server).get_volume("vol-1").await.unwrap_err();
    assert!(matches!(err, OsdsError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let conf = ClientConf {
        endpoint: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let client = HttpVolumeClient::new(&conf).unwrap();

    let err = client.list_volumes().await.unwrap_err();
    assert!(matches!(err, OsdsError::Network { .. }));
}
