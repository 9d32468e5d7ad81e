//! Requests against the student API.

use reqwasm::http::{Request, Response};
use satchel::model::{
    api::ApiResponseDto,
    student::{StudentDetailDto, StudentPageDto},
};

/// Retrieve one page of students
pub async fn get_students(page: u64, search: String) -> Result<StudentPageDto, String> {
    let mut url = format!("/api/students?page={}", page);
    if !search.trim().is_empty() {
        url.push_str("&search=");
        url.push_str(&encode_query(search.trim()));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<StudentPageDto>()
            .await
            .map_err(|e| format!("Failed to parse student listing: {}", e)),
        _ => Err(failure_message(response).await),
    }
}

/// Retrieve a student with its pickup persons
pub async fn get_student(id: i32) -> Result<StudentDetailDto, String> {
    let response = Request::get(&format!("/api/view-student/{}", id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<StudentDetailDto>()
            .await
            .map_err(|e| format!("Failed to parse student: {}", e)),
        _ => Err(failure_message(response).await),
    }
}

pub async fn delete_student(id: i32) -> Result<(), String> {
    let response = Request::delete(&format!("/api/student/{}", id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => Ok(()),
        _ => Err(failure_message(response).await),
    }
}

async fn failure_message(response: Response) -> String {
    let status = response.status();

    if let Ok(body) = response.json::<ApiResponseDto>().await {
        format!("Request failed with status {}: {}", status, body.message)
    } else {
        format!("Request failed with status {}", status)
    }
}

/// Percent-encodes a query value.
fn encode_query(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
