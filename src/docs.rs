use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::conversion::handler::convert_to_mp3,
        crate::modules::transcription::handler::transcribe,
    ),
    components(
        schemas(
            crate::common::response::ErrorResponse,
            crate::modules::conversion::dto::ConvertResponse,
            crate::modules::transcription::dto::TranscribeResponse,
        )
    ),
    tags(
        (name = "Audio", description = "Video to MP3 conversion and speech-to-text")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/convert_to_mp3"));
        assert!(doc.paths.paths.contains_key("/transcribe"));
    }
}
