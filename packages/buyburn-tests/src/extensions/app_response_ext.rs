use crate::colored::Colorize;
use buyburn_treasury::error::ContractError;
use cosmwasm_std::{Attribute, StdError, StdResult};
use cw_multi_test::AppResponse;

pub trait EventChecker {
  fn assert_attribute_ty(&self, ty: impl Into<String>, attr: Attribute) -> StdResult<String>;
  fn assert_attribute(&self, attr: Attribute) -> StdResult<String>;
}

impl EventChecker for AppResponse {
  fn assert_attribute_ty(&self, ty: impl Into<String>, attr: Attribute) -> StdResult<String> {
    let ty: String = ty.into();
    let found = self.events.iter().any(|a| {
      a.ty == ty && a.attributes.iter().any(|b| b.key == attr.key && b.value == attr.value)
    });

    if !found {
      let text = format!("Could not find attribute (\"{0}\", \"{1}\")", attr.key, attr.value);
      println!("{}", text.red());
      println!("{:?}", self.events);
      return Err(StdError::generic_err(text));
    }

    Ok(attr.value)
  }

  fn assert_attribute(&self, attr: Attribute) -> StdResult<String> {
    self.assert_attribute_ty("wasm", attr)
  }
}

impl EventChecker for Result<AppResponse, anyhow::Error> {
  #[track_caller]
  fn assert_attribute_ty(&self, ty: impl Into<String>, attr: Attribute) -> StdResult<String> {
    self.as_ref().unwrap().assert_attribute_ty(ty, attr)
  }

  #[track_caller]
  fn assert_attribute(&self, attr: Attribute) -> StdResult<String> {
    self.as_ref().unwrap().assert_attribute(attr)
  }
}

pub trait Valid {
  fn assert_valid(&self);
  fn assert_error(&self, expected: ContractError);
  /// For failures raised by other contracts, e.g. a router refusing the swap.
  fn assert_error_msg(&self, expected: &str);
}

impl Valid for Result<AppResponse, anyhow::Error> {
  #[track_caller]
  fn assert_valid(&self) {
    if let Err(err) = self {
      let text = format!("{:?}", err);
      println!("{}", text.red());
      panic!("expected success, got {}", err.root_cause());
    }
  }

  #[track_caller]
  fn assert_error(&self, expected: ContractError) {
    match self {
      Ok(res) => panic!("expected {}, got {:?}", expected, res.events),
      Err(err) => assert_eq!(err.root_cause().to_string(), expected.to_string()),
    }
  }

  #[track_caller]
  fn assert_error_msg(&self, expected: &str) {
    match self {
      Ok(res) => panic!("expected {}, got {:?}", expected, res.events),
      Err(err) => {
        let actual = err.root_cause().to_string();
        if !actual.contains(expected) {
          println!("{}", format!("{:?}", err).red());
        }
        assert!(actual.contains(expected), "{} does not contain {}", actual, expected);
      },
    }
  }
}
