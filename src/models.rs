use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Request-side records are only ever read from JSON objects. The derived
/// impls (`remote = "Self"`) would also bind a JSON array by field position,
/// so the public `Deserialize` goes through a map-only visitor first.
trait FromObject<'de>: Sized {
    fn from_object<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>;
}

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: FromObject<'de>> Visitor<'de> for ObjectVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
        T::from_object(MapAccessDeserializer::new(map))
    }
}

macro_rules! json_object {
    ($ty:ident) => {
        impl<'de> FromObject<'de> for $ty {
            fn from_object<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $ty::deserialize(deserializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_map(ObjectVisitor::<$ty>(PhantomData))
            }
        }
    };
    ($ty:ident, serialize) => {
        json_object!($ty);

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $ty::serialize(self, serializer)
            }
        }
    };
}

/// `null` reads as the type's default, like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` entries inside `seasons` are dropped.
fn seasons_without_nulls<'de, D>(deserializer: D) -> Result<Option<Vec<Slug>>, D::Error>
where
    D: Deserializer<'de>,
{
    let seasons = Option::<Vec<Option<Slug>>>::deserialize(deserializer)?;
    Ok(seasons.map(|seasons| seasons.into_iter().flatten().collect()))
}

/// Location of a show's artwork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct ShowImage {
    #[serde(rename = "showImage", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

json_object!(ShowImage, serialize);

/// Details about the next episode of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Episode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

json_object!(Episode, serialize);

/// Human-readable path identifier, e.g. `show/16kidsandcounting/season/1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Slug {
    #[serde(rename = "slug", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

json_object!(Slug, serialize);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Show {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drm: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ShowImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_episode: Option<Episode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_colour: Option<String>,
    #[serde(
        default,
        deserialize_with = "seasons_without_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub seasons: Option<Vec<Slug>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_channel: Option<String>,
}

json_object!(Show, serialize);

impl Show {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(|image| image.url.as_deref())
    }

    pub fn has_episodes(&self) -> bool {
        self.episode_count > 0
    }
}

/// Incoming request body. `payload` may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(remote = "Self")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub payload: Option<Vec<Show>>,
}

json_object!(RequestEnvelope);

/// The fields a client needs to render a listing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseItem {
    pub image: String,
    pub slug: String,
    pub title: String,
}

impl From<&Show> for ResponseItem {
    // A show without an image projects to an empty image URL.
    fn from(show: &Show) -> Self {
        Self {
            image: show.image_url().unwrap_or_default().to_string(),
            slug: show.slug.clone().unwrap_or_default(),
            title: show.title.clone().unwrap_or_default(),
        }
    }
}

/// Outgoing response body. The `response` key is left out entirely when
/// there are no items, so an empty result serializes as `{}`.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<ResponseItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults_when_fields_missing() {
        let show: Show = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert!(!show.drm);
        assert_eq!(show.episode_count, 0);
        assert!(show.image.is_none());
        assert_eq!(show.title.as_deref(), Some("Bare"));
    }

    #[test]
    fn test_show_accepts_nulls_for_optional_parts() {
        let show: Show = serde_json::from_str(
            r#"{"drm": true, "image": null, "nextEpisode": null, "seasons": null, "slug": "show/x"}"#,
        )
        .unwrap();
        assert!(show.drm);
        assert!(show.image.is_none());
        assert!(show.next_episode.is_none());
        assert!(show.seasons.is_none());
    }

    #[test]
    fn test_null_scalars_read_as_defaults() {
        let show: Show = serde_json::from_str(
            r#"{"drm": null, "episodeCount": null, "seasons": [null, {"slug": "show/x/season/2"}, null]}"#,
        )
        .unwrap();
        assert!(!show.drm);
        assert_eq!(show.episode_count, 0);
        assert_eq!(
            show.seasons,
            Some(vec![Slug {
                name: Some("show/x/season/2".to_string())
            }])
        );
    }

    #[test]
    fn test_records_reject_json_arrays() {
        assert!(serde_json::from_str::<Show>(r#"["UK", "desc", true, 3]"#).is_err());
        assert!(serde_json::from_str::<ShowImage>(r#"["http://a.jpg"]"#).is_err());
        assert!(serde_json::from_str::<Episode>(r#"["GEM"]"#).is_err());
        assert!(serde_json::from_str::<Slug>(r#"["show/x"]"#).is_err());
        assert!(serde_json::from_str::<RequestEnvelope>("[]").is_err());
        assert!(serde_json::from_str::<Show>(r#"{"image": ["http://a.jpg"]}"#).is_err());
        assert!(serde_json::from_str::<Show>(r#"{"seasons": [["show/x"]]}"#).is_err());
    }

    #[test]
    fn test_keys_are_matched_exactly() {
        let show: Show = serde_json::from_str(r#"{"DRM": true, "EpisodeCount": 3}"#).unwrap();
        assert!(!show.drm);
        assert_eq!(show.episode_count, 0);

        let envelope: RequestEnvelope =
            serde_json::from_str(r#"{"Payload": [{"drm": true}]}"#).unwrap();
        assert!(envelope.payload.is_none());
    }

    #[test]
    fn test_show_serializes_back_to_camel_case() {
        let show: Show = serde_json::from_str(
            r#"{"drm": true, "episodeCount": 2, "image": {"showImage": "http://a.jpg"}, "nextEpisode": {"channelLogo": "http://logo.png"}}"#,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&show).unwrap(),
            serde_json::json!({
                "drm": true,
                "episodeCount": 2,
                "image": {"showImage": "http://a.jpg"},
                "nextEpisode": {"channelLogo": "http://logo.png"}
            })
        );
    }

    #[test]
    fn test_show_reads_camel_case_fields() {
        let show: Show = serde_json::from_str(
            r##"{
                "episodeCount": 4,
                "primaryColour": "#ff7800",
                "tvChannel": "GEM",
                "nextEpisode": {"channelLogo": "http://logo.png", "date": "2014-05-01"},
                "seasons": [{"slug": "show/x/season/1"}]
            }"##,
        )
        .unwrap();
        assert_eq!(show.episode_count, 4);
        assert_eq!(show.primary_colour.as_deref(), Some("#ff7800"));
        assert_eq!(show.tv_channel.as_deref(), Some("GEM"));
        let next = show.next_episode.unwrap();
        assert_eq!(next.channel_logo.as_deref(), Some("http://logo.png"));
        assert_eq!(
            show.seasons.unwrap()[0].name.as_deref(),
            Some("show/x/season/1")
        );
    }

    #[test]
    fn test_response_item_from_show() {
        let show = Show {
            image: Some(ShowImage {
                url: Some("http://mock.com/pic.jpg".to_string()),
            }),
            slug: Some("show/mock".to_string()),
            title: Some("Mock title".to_string()),
            country: Some("UK".to_string()),
            ..Default::default()
        };

        let item = ResponseItem::from(&show);
        assert_eq!(item.image, "http://mock.com/pic.jpg");
        assert_eq!(item.slug, "show/mock");
        assert_eq!(item.title, "Mock title");
    }

    #[test]
    fn test_response_item_without_image_is_empty_string() {
        let show = Show {
            slug: Some("show/noimage".to_string()),
            title: Some("No Image".to_string()),
            ..Default::default()
        };

        assert_eq!(ResponseItem::from(&show).image, "");

        let empty_image = Show {
            image: Some(ShowImage::default()),
            ..show
        };
        assert_eq!(ResponseItem::from(&empty_image).image, "");
    }

    #[test]
    fn test_empty_response_envelope_serializes_as_empty_object() {
        let json = serde_json::to_string(&ResponseEnvelope::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
