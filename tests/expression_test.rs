mod common;
use common::*;
use pocket::lang::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn test_precedence() {
    assert_eq!(exec("print 2+3*4"), "14\n");
    assert_eq!(exec("print ((2+3)*4)"), "20\n");
    assert_eq!(exec("print 1+1=2"), "1\n");
    assert_eq!(exec("print 1<<4|1"), "17\n");
}

#[test]
fn test_left_associative() {
    assert_eq!(exec("print 10-4-3"), "3\n");
    assert_eq!(exec("print 64/4/2"), "8\n");
    assert_eq!(exec("print 1 < 2 = 1"), "1\n");
}

#[test]
fn test_number_forms() {
    assert_eq!(exec("print 0x1F; print 031"), "31\n31\n");
    assert_eq!(exec("print 0XfF"), "255\n");
}

#[test]
fn test_unary_operator() {
    assert_eq!(exec("print -5+2"), "-7\n");
    assert_eq!(exec("print -1+2"), "-3\n");
    assert_eq!(exec("print 2 * -3+1"), "-8\n");
    assert_eq!(exec("print -7/2"), "-3\n");
    assert_eq!(exec("var a = 4 print -a"), "-4\n");
}

#[test]
fn test_comparisons() {
    assert_eq!(exec("print 3<>3"), "0\n");
    assert_eq!(exec("print 2<=2"), "1\n");
    assert_eq!(exec("print 2>=3"), "0\n");
    assert_eq!(exec("print 5>4"), "1\n");
}

#[test]
fn test_bitwise() {
    assert_eq!(exec("print 6&3^1"), "3\n");
    assert_eq!(exec("print 0x10 >> 2"), "4\n");
    assert_eq!(exec("print 1<<64"), "1\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(error_kind("print 1/0"), ErrorCode::DivisionByZero);
    assert_eq!(error_kind("var z = 0 var a = 5/z"), ErrorCode::DivisionByZero);
}

#[test]
fn test_string_in_expression_is_zero() {
    assert_eq!(exec("var s = \"abc\" print s"), "0\n");
    assert_eq!(exec("var b = {x} print b+1"), "1\n");
}

#[test]
fn test_unknown_operator() {
    assert_eq!(error_kind("print 2=>1"), ErrorCode::SyntaxError);
}

#[test]
fn test_missing_operand() {
    assert_eq!(error_kind("var a = 1+"), ErrorCode::SyntaxError);
    assert_eq!(error_kind("var a = (1+2"), ErrorCode::SyntaxError);
    assert_eq!(error_kind("var a = if"), ErrorCode::SyntaxError);
}
