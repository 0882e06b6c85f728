use bizcat_core::{ImageRef, ProductCreate, ProductUpdate};

use super::*;

fn hosted(url: &str) -> ImageRef {
    ImageRef::Url(url.to_string())
}

fn make_create() -> ProductCreate {
    ProductCreate {
        name: "Ceramic Mug".to_string(),
        description: "350ml, dishwasher safe".to_string(),
        retailer_id: Some("MUG-001".to_string()),
        images: vec![hosted("https://mmg.whatsapp.net/v/t45/mug.jpg")],
        price: 1299,
        currency: "USD".to_string(),
        origin_country_code: Patch::Unset,
        is_hidden: Some(false),
    }
}

fn child_tags(node: &BinaryNode) -> Vec<&str> {
    node.child_nodes().iter().map(|c| c.tag.as_str()).collect()
}

// -----------------------------------------------------------------------
// build_product_node
// -----------------------------------------------------------------------

#[test]
fn product_node_emits_children_in_wire_order() {
    let node = build_product_node(Some("8675309"), &make_create()).unwrap();
    assert_eq!(node.tag, "product");
    assert_eq!(
        child_tags(&node),
        vec![
            "id",
            "name",
            "description",
            "retailer_id",
            "media",
            "price",
            "currency"
        ]
    );
    assert_eq!(node.child_string("id").as_deref(), Some("8675309"));
    assert_eq!(node.child_string("price").as_deref(), Some("1299"));
    assert_eq!(node.attr("is_hidden"), Some("false"));
}

#[test]
fn product_node_without_id_has_no_id_child() {
    let node = build_product_node(None, &make_create()).unwrap();
    assert!(node.child("id").is_none());
}

#[test]
fn product_node_renders_each_image_as_media_image_url() {
    let mut create = make_create();
    create.images.push(hosted("https://mmg.whatsapp.net/v/t45/mug-back.jpg"));
    let node = build_product_node(None, &create).unwrap();

    let media = node.child("media").unwrap();
    let urls: Vec<String> = media
        .children("image")
        .filter_map(|img| img.child_string("url"))
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://mmg.whatsapp.net/v/t45/mug.jpg".to_string(),
            "https://mmg.whatsapp.net/v/t45/mug-back.jpg".to_string(),
        ]
    );
}

#[test]
fn product_node_omits_media_block_when_no_images() {
    let mut create = make_create();
    create.images.clear();
    let node = build_product_node(None, &create).unwrap();
    assert!(node.child("media").is_none());
}

#[test]
fn product_node_rejects_image_that_was_not_uploaded() {
    let mut create = make_create();
    create.images.push(ImageRef::Bytes(vec![0xff, 0xd8]));
    let err = build_product_node(None, &create).unwrap_err();
    assert!(
        matches!(err, CodecError::ImageNotUploaded { index: 1 }),
        "expected ImageNotUploaded at index 1, got: {err:?}"
    );
    assert!(!err.is_shape_violation());
}

#[test]
fn sparse_update_emits_only_defined_fields() {
    let update = ProductUpdate {
        price: Some(999),
        ..ProductUpdate::default()
    };
    let node = build_product_node(Some("42"), &update).unwrap();
    assert_eq!(child_tags(&node), vec!["id", "price"]);
    assert!(node.attrs.is_empty());
}

#[test]
fn origin_country_unset_emits_nothing() {
    let node = build_product_node(None, &make_create()).unwrap();
    assert!(node.attr("compliance_category").is_none());
    assert!(node.child("compliance_info").is_none());
}

#[test]
fn origin_country_clear_marks_product_exempt() {
    let mut create = make_create();
    create.origin_country_code = Patch::Clear;
    let node = build_product_node(None, &create).unwrap();
    assert_eq!(node.attr("compliance_category"), Some("COUNTRY_ORIGIN_EXEMPT"));
    assert!(node.child("compliance_info").is_none());
}

#[test]
fn origin_country_value_emits_compliance_info() {
    let mut create = make_create();
    create.origin_country_code = Patch::Value("BR".to_string());
    let node = build_product_node(None, &create).unwrap();
    assert!(node.attr("compliance_category").is_none());
    let info = node.child("compliance_info").unwrap();
    assert_eq!(info.child_string("country_code_origin").as_deref(), Some("BR"));
    assert_eq!(child_tags(&node).last(), Some(&"compliance_info"));
}

#[test]
fn is_hidden_absent_on_update_emits_no_attribute() {
    let update = ProductUpdate {
        name: Some("Renamed".to_string()),
        ..ProductUpdate::default()
    };
    let node = build_product_node(Some("1"), &update).unwrap();
    assert!(node.attr("is_hidden").is_none());
}

#[test]
fn is_hidden_true_is_rendered_as_string() {
    let update = ProductUpdate {
        is_hidden: Some(true),
        ..ProductUpdate::default()
    };
    let node = build_product_node(Some("1"), &update).unwrap();
    assert_eq!(node.attr("is_hidden"), Some("true"));
}

// -----------------------------------------------------------------------
// query builders
// -----------------------------------------------------------------------

#[test]
fn catalog_query_shape_without_cursor() {
    let iq = build_catalog_query("123@s.whatsapp.net", 10, None);
    assert_eq!(iq.tag, "iq");
    assert_eq!(iq.attr("to"), Some("s.whatsapp.net"));
    assert_eq!(iq.attr("type"), Some("get"));
    assert_eq!(iq.attr("xmlns"), Some("w:biz:catalog"));
    assert!(iq.attr("smax_id").is_none());

    let catalog = iq.child("product_catalog").unwrap();
    assert_eq!(catalog.attr("jid"), Some("123@s.whatsapp.net"));
    assert_eq!(catalog.attr("allow_shop_source"), Some("true"));
    assert_eq!(child_tags(catalog), vec!["limit", "width", "height"]);
    assert_eq!(catalog.child_string("limit").as_deref(), Some("10"));
    assert_eq!(catalog.child_string("width").as_deref(), Some("100"));
    assert_eq!(catalog.child_string("height").as_deref(), Some("100"));
}

#[test]
fn catalog_query_appends_cursor_last() {
    let iq = build_catalog_query("123@s.whatsapp.net", 25, Some("QVFIUm9"));
    let catalog = iq.child("product_catalog").unwrap();
    assert_eq!(child_tags(catalog), vec!["limit", "width", "height", "after"]);
    assert_eq!(catalog.child_string("after").as_deref(), Some("QVFIUm9"));
}

#[test]
fn collections_query_pins_smax_id_and_limits() {
    let iq = build_collections_query("123@s.whatsapp.net", 51);
    assert_eq!(iq.attr("smax_id"), Some("35"));
    assert_eq!(iq.attr("xmlns"), Some("w:biz:catalog"));
    let collections = iq.child("collections").unwrap();
    assert_eq!(collections.attr("biz_jid"), Some("123@s.whatsapp.net"));
    assert_eq!(
        child_tags(collections),
        vec!["collection_limit", "item_limit", "width", "height"]
    );
    assert_eq!(collections.child_string("collection_limit").as_deref(), Some("51"));
    assert_eq!(collections.child_string("item_limit").as_deref(), Some("51"));
}

#[test]
fn order_query_nests_dimensions_and_token() {
    let iq = build_order_details_query("ORDER-7", "dG9rZW4=");
    assert_eq!(iq.attr("xmlns"), Some("fb:thrift_iq"));
    assert_eq!(iq.attr("smax_id"), Some("5"));
    let order = iq.child("order").unwrap();
    assert_eq!(order.attr("op"), Some("get"));
    assert_eq!(order.attr("id"), Some("ORDER-7"));
    let dims = order.child("image_dimensions").unwrap();
    assert_eq!(dims.child_string("width").as_deref(), Some("100"));
    assert_eq!(dims.child_string("height").as_deref(), Some("100"));
    assert_eq!(order.child_string("token").as_deref(), Some("dG9rZW4="));
}

#[test]
fn create_request_wraps_product_with_dimension_hints() {
    let product = build_product_node(None, &make_create()).unwrap();
    let iq = build_product_create_request(product.clone());
    assert_eq!(iq.attr("type"), Some("set"));
    let add = iq.child("product_catalog_add").unwrap();
    assert_eq!(add.attr("v"), Some("1"));
    assert_eq!(child_tags(add), vec!["product", "width", "height"]);
    assert_eq!(add.child("product"), Some(&product));
}

#[test]
fn edit_request_uses_edit_wrapper() {
    let product = build_product_node(Some("9"), &ProductUpdate::default()).unwrap();
    let iq = build_product_edit_request(product);
    let edit = iq.child("product_catalog_edit").unwrap();
    assert_eq!(edit.attr("v"), Some("1"));
    assert!(iq.child("product_catalog_add").is_none());
}

#[test]
fn delete_request_lists_one_product_per_id() {
    let iq = build_product_delete_request(&["a", "b"]);
    let delete = iq.child("product_catalog_delete").unwrap();
    assert_eq!(delete.attr("v"), Some("1"));
    let ids: Vec<String> = delete
        .children("product")
        .filter_map(|p| p.child_string("id"))
        .collect();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

// -----------------------------------------------------------------------
// business profile
// -----------------------------------------------------------------------

fn day(day_of_week: &str, mode: HoursMode, open: Option<&str>, close: Option<&str>) -> DayConfig {
    DayConfig {
        day_of_week: day_of_week.to_string(),
        mode,
        open_time: open.map(str::to_string),
        close_time: close.map(str::to_string),
    }
}

#[test]
fn closed_day_drops_times_even_when_present() {
    let profile = BusinessProfileUpdate {
        business_hours: Some(BusinessHours {
            timezone: "America/Sao_Paulo".to_string(),
            business_config: vec![day("sun", HoursMode::Closed, Some("540"), Some("1080"))],
        }),
        ..BusinessProfileUpdate::default()
    };
    let node = build_business_profile_node("123@s.whatsapp.net", &profile);
    let hours = node.child("business_hours").unwrap();
    let cfg = hours.child("config").unwrap();
    assert_eq!(cfg.attr("mode"), Some("closed"));
    assert!(cfg.attr("open_time").is_none());
    assert!(cfg.attr("close_time").is_none());
}

#[test]
fn specific_hours_day_keeps_defined_times() {
    let profile = BusinessProfileUpdate {
        business_hours: Some(BusinessHours {
            timezone: "UTC".to_string(),
            business_config: vec![
                day("mon", HoursMode::SpecificHours, Some("540"), Some("1080")),
                day("tue", HoursMode::SpecificHours, Some("600"), None),
                day("wed", HoursMode::Open24h, None, None),
            ],
        }),
        ..BusinessProfileUpdate::default()
    };
    let node = build_business_profile_node("123@s.whatsapp.net", &profile);
    let hours = node.child("business_hours").unwrap();
    assert_eq!(hours.attr("timezone"), Some("UTC"));

    let configs: Vec<&BinaryNode> = hours.children("config").collect();
    assert_eq!(configs.len(), 3);
    assert_eq!(configs[0].attr("open_time"), Some("540"));
    assert_eq!(configs[0].attr("close_time"), Some("1080"));
    assert_eq!(configs[1].attr("open_time"), Some("600"));
    assert!(configs[1].attr("close_time").is_none());
    assert_eq!(configs[2].attr("mode"), Some("open_24h"));
    assert_eq!(configs[2].attrs.len(), 2);
}

#[test]
fn profile_node_emits_only_defined_fields_in_order() {
    let profile = BusinessProfileUpdate {
        address: Some("Rua Augusta 100".to_string()),
        website: Some(vec![
            "https://shop.example".to_string(),
            "https://blog.example".to_string(),
        ]),
        category: Some("Retail".to_string()),
        ..BusinessProfileUpdate::default()
    };
    let node = build_business_profile_node("123@s.whatsapp.net", &profile);
    assert_eq!(node.attr("jid"), Some("123@s.whatsapp.net"));
    assert_eq!(
        child_tags(&node),
        vec!["address", "website", "website", "category"]
    );
}

#[test]
fn profile_update_wraps_in_versioned_business_profile() {
    let iq = build_business_profile_update("123@s.whatsapp.net", &BusinessProfileUpdate::default());
    assert_eq!(iq.attr("xmlns"), Some("w:biz"));
    assert_eq!(iq.attr("type"), Some("set"));
    let bp = iq.child("business_profile").unwrap();
    assert_eq!(bp.attr("v"), Some("244"));
    let profile = bp.child("profile").unwrap();
    assert!(profile.child_nodes().is_empty());
}
