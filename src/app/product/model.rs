//! 产品数据模型
//!
//! 除 `id` 外不对字段做任何类型约束：请求体和数据文件里的值原样保存，
//! 只有需要文件名的地方才把 `image` / `coverImage` 当作字符串读取。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 创建时从请求体中取出的字段，按此顺序写入记录
const CREATE_FIELDS: [&str; 3] = ["name", "price", "image"];

/// 列表接口追加的字段名
pub const COVER_IMAGE_URL: &str = "coverImageUrl";

/// 持久化的产品记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    /// 其余字段，保持数据文件中的顺序
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// `image` 为非空字符串时返回文件名
    pub fn image_file_name(&self) -> Option<&str> {
        self.non_empty_str("image")
    }

    /// 列表接口使用的封面文件名：优先 `coverImage`，否则退回 `image`
    pub fn cover_file_name(&self) -> Option<&str> {
        self.non_empty_str("coverImage")
            .or_else(|| self.image_file_name())
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.field(key)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// 创建产品请求
///
/// 任何 JSON 都能接受；只取 `name`、`price`、`image` 三个键，值不做校验。
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Value")]
pub struct NewProduct {
    fields: Map<String, Value>,
}

impl From<Value> for NewProduct {
    fn from(body: Value) -> Self {
        let fields = CREATE_FIELDS
            .iter()
            .filter_map(|key| body.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect();
        Self { fields }
    }
}

impl NewProduct {
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            fields: self.fields,
        }
    }
}

/// 更新产品请求：请求体中除 `id` 外的每个键都覆盖到记录上，`null` 也照样写入
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Value")]
pub struct ProductPatch {
    fields: Map<String, Value>,
}

impl From<Value> for ProductPatch {
    fn from(body: Value) -> Self {
        let fields = match body {
            Value::Object(mut fields) => {
                fields.retain(|key, _| key != "id");
                fields
            }
            _ => Map::new(),
        };
        Self { fields }
    }
}

impl ProductPatch {
    pub fn apply_to(self, product: &mut Product) {
        for (key, value) in self.fields {
            product.fields.insert(key, value);
        }
    }
}

/// 列表接口返回的产品，附带可直接访问的封面地址
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "coverImageUrl")]
    pub cover_image_url: Option<String>,
}

impl ProductView {
    /// 记录里已有的 `coverImageUrl` 会被计算出的地址取代
    pub fn new(mut product: Product, cover_image_url: Option<String>) -> Self {
        product.fields.retain(|key, _| key != COVER_IMAGE_URL);
        Self {
            product,
            cover_image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_keep_values_and_order() {
        let raw = json!({"id": 3, "name": 42, "price": "10", "image": "3.jpg", "stock": 7});
        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(product.field("price"), Some(&json!("10")));
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"id":3,"name":42,"price":"10","image":"3.jpg","stock":7}"#
        );
    }

    #[test]
    fn test_cover_file_name_prefers_cover_image() {
        let product = Product::new(1).with_field("image", "1.jpg");
        assert_eq!(product.cover_file_name(), Some("1.jpg"));

        let product = product.with_field("coverImage", "cover-1.jpg");
        assert_eq!(product.cover_file_name(), Some("cover-1.jpg"));

        let product = Product::new(2).with_field("image", "");
        assert_eq!(product.cover_file_name(), None);

        let product = Product::new(3).with_field("image", 7);
        assert_eq!(product.image_file_name(), None);
    }

    #[test]
    fn test_new_product_takes_only_known_keys() {
        let new = NewProduct::from(json!({"id": 99, "name": "Ivy", "price": "12", "stock": 1}));
        let product = new.into_product(5);
        assert_eq!(product.id, 5);
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 5, "name": "Ivy", "price": "12"})
        );
    }

    #[test]
    fn test_new_product_from_non_object() {
        let product = NewProduct::from(json!([1, 2])).into_product(1);
        assert!(product.fields.is_empty());
    }

    #[test]
    fn test_patch_merges_every_key() {
        let mut product = Product::new(1)
            .with_field("name", "Fern")
            .with_field("price", 10)
            .with_field("image", "1.jpg");
        ProductPatch::from(json!({"id": 8, "stock": 5, "image": null, "price": "12.50"}))
            .apply_to(&mut product);

        assert_eq!(product.id, 1);
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"id":1,"name":"Fern","price":"12.50","image":null,"stock":5}"#
        );
    }

    #[test]
    fn test_view_replaces_stored_cover_url() {
        let product = Product::new(1)
            .with_field("image", "1.jpg")
            .with_field("coverImageUrl", "http://old/images/1.jpg");
        let view = ProductView::new(product, Some("http://new/images/1.jpg".to_string()));
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"id":1,"image":"1.jpg","coverImageUrl":"http://new/images/1.jpg"}"#
        );
    }
}
