//! Drives the exported `MyMoneroCore` class against JS core objects.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Object, Reflect, JSON};
use mymonero_bridge_wasm::{JsNativeCore, MyMoneroCore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

const CALL_CORE: &str = r#"
    this.calls = (this.calls || 0) + 1;
    if (method === "get_address") {
        if (args[0] === "seed123") return "{\"address\":\"4Ab...\"}";
        throw new Error("Invalid seed");
    }
    if (method === "echo") return JSON.stringify(args);
    if (method === "count") return String(args.length);
    if (method === "throw_string") throw "plain failure";
    if (method === "throw_object") throw { code: 7 };
    if (method === "throw_message_object") throw { message: "wallet locked" };
    if (method === "number") return 42;
    throw new Error("No mymonero-core-cpp method " + method);
"#;

const LIST_METHODS: &str = r#"
    this.lists = (this.lists || 0) + 1;
    return ["get_address", "echo", "count"];
"#;

fn fake_core() -> JsNativeCore {
    let core = Object::new();
    Reflect::set(
        &core,
        &"callCore".into(),
        &Function::new_with_args("method, args", CALL_CORE),
    )
    .unwrap();
    Reflect::set(
        &core,
        &"listMethodNames".into(),
        &Function::new_no_args(LIST_METHODS),
    )
    .unwrap();
    core.unchecked_into()
}

fn strings(values: &[&str]) -> JsValue {
    values
        .iter()
        .map(|s| JsValue::from_str(s))
        .collect::<Array>()
        .into()
}

fn counter(core: &JsValue, key: &str) -> f64 {
    Reflect::get(core, &key.into())
        .unwrap()
        .as_f64()
        .unwrap_or(0.0)
}

fn field(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &key.into()).unwrap().as_string()
}

async fn resolve(promise: js_sys::Promise) -> Result<JsValue, JsValue> {
    JsFuture::from(promise).await
}

#[wasm_bindgen_test]
async fn resolves_with_core_string() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let out = resolve(bridge.invoke("get_address".into(), strings(&["seed123"])))
        .await
        .unwrap();
    assert_eq!(out.as_string().unwrap(), "{\"address\":\"4Ab...\"}");
}

#[wasm_bindgen_test]
async fn rejects_unknown_method_with_category() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let err = resolve(bridge.invoke("bad_method".into(), strings(&[])))
        .await
        .unwrap_err();
    assert!(err.is_instance_of::<js_sys::Error>());
    assert_eq!(field(&err, "category").unwrap(), "MyMoneroError");
    assert_eq!(
        field(&err, "message").unwrap(),
        "No mymonero-core-cpp method bad_method"
    );
}

#[wasm_bindgen_test]
async fn core_error_message_passes_through() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let err = resolve(bridge.invoke("get_address".into(), strings(&["nope"])))
        .await
        .unwrap_err();
    assert_eq!(field(&err, "message").unwrap(), "Invalid seed");

    let err = resolve(bridge.invoke("throw_string".into(), strings(&[])))
        .await
        .unwrap_err();
    assert_eq!(field(&err, "message").unwrap(), "plain failure");

    let err = resolve(bridge.invoke("throw_object".into(), strings(&[])))
        .await
        .unwrap_err();
    assert_eq!(
        field(&err, "message").unwrap(),
        "mymonero-core-cpp threw an exception"
    );
}

#[wasm_bindgen_test]
async fn message_property_of_thrown_object_kept() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let err = resolve(bridge.invoke("throw_message_object".into(), strings(&[])))
        .await
        .unwrap_err();
    assert_eq!(field(&err, "category").unwrap(), "MyMoneroError");
    assert_eq!(field(&err, "message").unwrap(), "wallet locked");
}

#[wasm_bindgen_test]
async fn registry_with_non_string_entry_advertises_nothing() {
    let core: JsValue = fake_core().into();
    Reflect::set(
        &core,
        &"listMethodNames".into(),
        &Function::new_no_args(r#"return ["get_address", 5, "count"];"#),
    )
    .unwrap();
    let bridge = MyMoneroCore::new(core.unchecked_into(), JsValue::UNDEFINED).unwrap();
    assert_eq!(bridge.method_names().length(), 0);

    let out = resolve(bridge.invoke("count".into(), strings(&["a"])))
        .await
        .unwrap();
    assert_eq!(out.as_string().unwrap(), "1");
}

#[wasm_bindgen_test]
async fn argument_order_preserved() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let out = resolve(bridge.invoke("echo".into(), strings(&["a", "b", "c"])))
        .await
        .unwrap();
    assert_eq!(out.as_string().unwrap(), r#"["a","b","c"]"#);
}

#[wasm_bindgen_test]
async fn empty_arguments_stay_empty() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let out = resolve(bridge.invoke("count".into(), strings(&[])))
        .await
        .unwrap();
    assert_eq!(out.as_string().unwrap(), "0");
}

#[wasm_bindgen_test]
async fn non_string_argument_rejected_before_core() {
    let core = fake_core();
    let core_ref = JsValue::clone(&core);
    let bridge = MyMoneroCore::new(core, JsValue::UNDEFINED).unwrap();

    let args: Array = [JsValue::from_str("a"), JsValue::from_f64(1.0)]
        .iter()
        .collect();
    let err = resolve(bridge.invoke("echo".into(), args.into()))
        .await
        .unwrap_err();
    assert_eq!(field(&err, "category").unwrap(), "MyMoneroError");
    assert_eq!(
        field(&err, "message").unwrap(),
        "argument 1 is not a string (found number)"
    );

    let err = resolve(bridge.invoke("echo".into(), JsValue::NULL))
        .await
        .unwrap_err();
    assert_eq!(field(&err, "message").unwrap(), "arguments must be an array");

    assert_eq!(counter(&core_ref, "calls"), 0.0);
}

#[wasm_bindgen_test]
async fn non_string_result_rejected() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let err = resolve(bridge.invoke("number".into(), strings(&[])))
        .await
        .unwrap_err();
    assert_eq!(
        field(&err, "message").unwrap(),
        "number returned a non-string result"
    );
}

#[wasm_bindgen_test]
async fn call_my_monero_alias() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    let out = resolve(bridge.call_my_monero("echo".into(), strings(&["x"])))
        .await
        .unwrap();
    assert_eq!(out.as_string().unwrap(), r#"["x"]"#);
}

#[wasm_bindgen_test]
fn method_names_read_once() {
    let core = fake_core();
    let core_ref = JsValue::clone(&core);
    let bridge = MyMoneroCore::new(core, JsValue::UNDEFINED).unwrap();

    let first = bridge.method_names();
    let second = bridge.method_names();
    assert_eq!(first.length(), 3);
    assert_eq!(first.get(0).as_string().unwrap(), "get_address");
    assert_eq!(first.get(2).as_string().unwrap(), "count");
    assert!(Object::is(&first, &second));
    assert!(Object::is_frozen(&first));
    assert_eq!(counter(&core_ref, "lists"), 1.0);
}

#[wasm_bindgen_test]
fn module_identity_and_constants() {
    let bridge = MyMoneroCore::new(fake_core(), JsValue::UNDEFINED).unwrap();
    assert_eq!(bridge.name(), "MyMoneroCore");
    assert_eq!(mymonero_bridge_wasm::module_name(), "MyMoneroCore");

    let ops = bridge.operations();
    assert_eq!(ops.get(0).as_string().unwrap(), "invoke");
    assert_eq!(ops.get(1).as_string().unwrap(), "callMyMonero");

    let constants = bridge.get_constants().unwrap();
    let names = Reflect::get(&constants, &"methodNames".into()).unwrap();
    assert!(Array::is_array(&names));
    assert_eq!(names.unchecked_into::<Array>().length(), 3);
}

#[wasm_bindgen_test]
fn config_accepts_log_calls_only() {
    let config = JSON::parse(r#"{"logCalls":true}"#).unwrap();
    let bridge = MyMoneroCore::new(fake_core(), config).unwrap();
    assert_eq!(bridge.name(), "MyMoneroCore");

    for json in [
        r#"{"errorCategory":"CoreFailure"}"#,
        r#"{"moduleName":"Monero"}"#,
        r#"{"retries":3}"#,
    ] {
        let config = JSON::parse(json).unwrap();
        assert!(MyMoneroCore::new(fake_core(), config).is_err());
    }
}
