//! Canned upstream catalogue records for tests.

use catalogue_client::{
    AcquisitionInformation, AcquisitionParameters, CatalogueCollection, CatalogueProduct,
    CollectionProperties, Instrument, Platform, ProductFile, ProductLinks, ProductProperties,
};
use serde_json::json;

/// An upstream collection with an open-ended date range and one
/// platform/instrument pair in its acquisition metadata.
pub fn collection(id: &str) -> CatalogueCollection {
    collection_with_date(id, "2019-01-01T00:00:00Z/")
}

/// An upstream collection with the given raw date-range string.
pub fn collection_with_date(id: &str, date: &str) -> CatalogueCollection {
    CatalogueCollection {
        id: id.to_string(),
        bbox: vec![-180.0, -56.0, 180.0, 83.0],
        properties: CollectionProperties {
            date: date.to_string(),
            title: format!("{} title", id),
            abstract_: format!("{} description", id),
            rights: "https://example.com/license".to_string(),
            keyword: vec!["earth observation".to_string(), "optical".to_string()],
            acquisition_information: vec![
                AcquisitionInformation {
                    platform: Some(Platform {
                        platform_short_name: Some("SENTINEL-2".to_string()),
                    }),
                    ..Default::default()
                },
                AcquisitionInformation {
                    instrument: Some(Instrument {
                        instrument_short_name: Some("MSI".to_string()),
                    }),
                    ..Default::default()
                },
            ],
        },
    }
}

/// An upstream product with one file in each of the four categories.
///
/// The file set is arranged so that every key-derivation rule is exercised:
/// the preview keys off its category, the alternate and data files off their
/// titles, and the related file off its href path.
pub fn product(collection: &str, id: &str) -> CatalogueProduct {
    let base = format!("https://data.example.com/{}", id);
    CatalogueProduct {
        id: id.to_string(),
        bbox: vec![4.8, 51.1, 5.0, 51.3],
        geometry: json!({
            "type": "Polygon",
            "coordinates": [[[4.8, 51.1], [5.0, 51.1], [5.0, 51.3], [4.8, 51.1]]]
        }),
        properties: ProductProperties {
            date: "2022-01-07T10:44:31Z".to_string(),
            title: format!("{} title", id),
            published: "2022-01-08T00:00:00Z".to_string(),
            updated: "2022-01-09T00:00:00Z".to_string(),
            parent_identifier: collection.to_string(),
            acquisition_information: vec![AcquisitionInformation {
                platform: Some(Platform {
                    platform_short_name: Some("SENTINEL-2A".to_string()),
                }),
                acquisition_parameters: Some(AcquisitionParameters {
                    beginning_date_time: Some("2022-01-07T10:44:31Z".to_string()),
                    ending_date_time: Some("2022-01-07T10:46:11Z".to_string()),
                }),
                ..Default::default()
            }],
            links: ProductLinks {
                previews: vec![ProductFile {
                    href: format!("{}/quicklook.png", base),
                    media_type: Some("image/png".to_string()),
                    category: Some("QUICKLOOK".to_string()),
                    ..Default::default()
                }],
                alternates: vec![ProductFile {
                    href: format!("{}/metadata.xml", base),
                    media_type: Some("application/xml".to_string()),
                    title: Some("Inspire metadata".to_string()),
                    ..Default::default()
                }],
                related: vec![ProductFile {
                    href: format!("{}/cloudmask.tif", base),
                    media_type: Some("image/tiff".to_string()),
                    ..Default::default()
                }],
                data: vec![ProductFile {
                    href: format!("{}/{}.tif", base, id),
                    media_type: Some("image/tiff".to_string()),
                    title: Some(format!("{}.tif", id)),
                    ..Default::default()
                }],
            },
        },
    }
}

/// A numbered run of products, `p1` through `pN`, for paging tests.
pub fn products(collection: &str, count: usize) -> Vec<CatalogueProduct> {
    (1..=count)
        .map(|i| product(collection, &format!("{}-p{}", collection, i)))
        .collect()
}
