//! Adaptation of upstream catalogue records to the STAC representation.
//!
//! The upstream records are nested and irregular: acquisition metadata is a
//! variable-length list whose entries may or may not carry a platform,
//! instrument, or sensing-parameter sub-record, and product files come in
//! four separately-listed categories. The mappers here flatten that into
//! the STAC collection/item schema.

use std::collections::BTreeSet;

use catalogue_client::{
    AcquisitionInformation, AcquisitionParameters, CatalogueCollection, CatalogueProduct,
    ProductFile, ProductLinks,
};
use stac_protocol::collections::collection_links;
use stac_protocol::{
    Asset, AssetMap, Collection, DatetimeSummary, Extent, Item, ItemProperties, StacError,
    Summaries, STAC_VERSION,
};

/// Map an upstream collection record to a STAC collection.
pub fn map_collection(collection: &CatalogueCollection, base_url: &str) -> Collection {
    let properties = &collection.properties;
    let (start, end) = split_date_interval(&properties.date);

    let mut mapped = Collection::new(
        &collection.id,
        Extent::new(collection.bbox.clone(), start.clone(), end.clone()),
    )
    .with_title(&properties.title)
    .with_description(&properties.abstract_)
    .with_license(&properties.rights)
    .with_keywords(properties.keyword.clone())
    .with_summaries(Summaries {
        datetime: DatetimeSummary { min: start, max: end },
        constellation: distinct_values(&properties.acquisition_information, |a| {
            a.platform.as_ref()?.platform_short_name.clone()
        }),
        instruments: distinct_values(&properties.acquisition_information, |a| {
            a.instrument.as_ref()?.instrument_short_name.clone()
        }),
    });

    mapped.links = collection_links(base_url, &collection.id);
    mapped
}

/// Map an upstream product record to a STAC item.
///
/// The sensing interval is required: a matched product without beginning or
/// ending datetime in its acquisition metadata is a malformed record, not an
/// empty case. The platform is optional and omitted when absent.
pub fn map_item(
    product: &CatalogueProduct,
    collection_id: &str,
    base_url: &str,
) -> Result<Item, StacError> {
    let properties = &product.properties;

    let start_datetime =
        first_acquisition_value(&properties.acquisition_information, |p| {
            p.beginning_date_time.clone()
        })
        .ok_or_else(|| {
            StacError::MalformedRecord(format!("product {} has no beginningDateTime", product.id))
        })?;
    let end_datetime =
        first_acquisition_value(&properties.acquisition_information, |p| {
            p.ending_date_time.clone()
        })
        .ok_or_else(|| {
            StacError::MalformedRecord(format!("product {} has no endingDateTime", product.id))
        })?;

    let platform = properties
        .acquisition_information
        .iter()
        .filter_map(|a| a.platform.as_ref()?.platform_short_name.clone())
        .next();

    let mut item = Item {
        type_: "Feature".to_string(),
        stac_version: STAC_VERSION.to_string(),
        id: product.id.clone(),
        geometry: product.geometry.clone(),
        bbox: product.bbox.clone(),
        properties: ItemProperties {
            datetime: properties.date.clone(),
            title: properties.title.clone(),
            created: properties.published.clone(),
            updated: properties.updated.clone(),
            start_datetime,
            end_datetime,
            platform,
        },
        collection: properties.parent_identifier.clone(),
        links: Vec::new(),
        assets: map_product_assets(&properties.links),
    };
    item.build_links(base_url, collection_id);
    Ok(item)
}

/// Map one upstream file reference to a STAC asset.
pub fn map_asset(file: &ProductFile, roles: Option<&[&str]>) -> Asset {
    let mut asset = Asset::new(&file.href);
    if let Some(media_type) = &file.media_type {
        asset = asset.with_type(media_type);
    }
    if let Some(title) = &file.title {
        asset = asset.with_title(title);
    }
    if let Some(roles) = roles {
        asset = asset.with_roles(roles.iter().map(|r| r.to_string()).collect());
    }
    asset
}

/// Assemble the asset map from the four upstream file categories.
///
/// Categories are processed in a fixed order; a key collision between
/// categories leaves the last-listed file in place.
fn map_product_assets(links: &ProductLinks) -> AssetMap {
    // (files, role tags, whether the key may fall back to the category tag)
    let groups: [(&[ProductFile], Option<&'static [&'static str]>, bool); 4] = [
        (&links.previews, Some(&["thumbnail"]), true),
        (&links.alternates, Some(&["metadata"]), false),
        (&links.related, None, false),
        (&links.data, Some(&["data"]), false),
    ];

    let mut assets = AssetMap::new();
    for (files, roles, category_key) in groups {
        for file in files {
            assets.insert(asset_key(file, category_key), map_asset(file, roles));
        }
    }
    assets
}

/// Derive the asset key for a file: its title, then (for previews) its
/// category tag, then the path component of its URL.
fn asset_key(file: &ProductFile, category_fallback: bool) -> String {
    if let Some(title) = &file.title {
        return title.clone();
    }
    if category_fallback {
        if let Some(category) = &file.category {
            return category.clone();
        }
    }
    href_path(&file.href).to_string()
}

/// Split the upstream date-range string into start and optional end.
///
/// The end is present only when the string has exactly two components and
/// the second is non-empty.
fn split_date_interval(date: &str) -> (String, Option<String>) {
    let parts: Vec<&str> = date.split('/').collect();
    let start = parts[0].to_string();
    let end = (parts.len() == 2 && !parts[1].is_empty()).then(|| parts[1].to_string());
    (start, end)
}

fn first_acquisition_value(
    info: &[AcquisitionInformation],
    get: impl Fn(&AcquisitionParameters) -> Option<String>,
) -> Option<String> {
    info.iter()
        .filter_map(|a| a.acquisition_parameters.as_ref())
        .filter_map(get)
        .next()
}

fn distinct_values(
    info: &[AcquisitionInformation],
    get: impl Fn(&AcquisitionInformation) -> Option<String>,
) -> Vec<String> {
    info.iter()
        .filter_map(get)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The path component of a URL, without query or fragment.
fn href_path(href: &str) -> &str {
    let path = match href.find("://") {
        Some(scheme_end) => {
            let rest = &href[scheme_end + 3..];
            match rest.find('/') {
                Some(slash) => &rest[slash..],
                None => "",
            }
        }
        None => href,
    };
    let end = path
        .find(|c| c == '?' || c == '#')
        .unwrap_or(path.len());
    &path[..end]
}
