//! JNI entry points
//!
//! Symbol names match the static natives declared by
//! `org.openjdk.bench.jdk.incubator.foreign.points.support.JNIPoint` and
//! `...BBPoint`. Every entry point runs through [`guarded`]: errors and
//! panics become pending Java exceptions and the call returns the zero value
//! of its return type. Nothing unwinds into the JVM.

#![allow(non_snake_case)]

use std::panic::{self, AssertUnwindSafe};

use jni::objects::{JByteBuffer, JClass};
use jni::sys::{jdouble, jint, jlong};
use jni::JNIEnv;
use points_tracing::perf_span;

use crate::buffer::buffer_distance;
use crate::error::{BridgeResult, RUNTIME_EXCEPTION};
use crate::point;

/// Java exception raised for a failed native call.
#[derive(Debug, PartialEq, Eq)]
struct PendingThrow {
    class: &'static str,
    message: String,
}

/// Run one native call, converting failures into Java exceptions.
fn guarded<'local, T, F>(env: &mut JNIEnv<'local>, entry: &'static str, call: F) -> T
where
    T: Default,
    F: FnOnce(&mut JNIEnv<'local>) -> BridgeResult<T>,
{
    let (value, pending) = settle(entry, panic::catch_unwind(AssertUnwindSafe(|| call(env))));
    if let Some(pending) = pending {
        throw(env, pending.class, &pending.message);
    }
    value
}

/// Split the outcome of a native call into the value handed back to Java
/// and the exception to raise, if any. Failed calls return `T::default()`.
fn settle<T: Default>(entry: &'static str, outcome: std::thread::Result<BridgeResult<T>>) -> (T, Option<PendingThrow>) {
    match outcome {
        Ok(Ok(value)) => (value, None),
        Ok(Err(err)) => {
            tracing::warn!(entry, error = %err, "Native call failed");
            let pending = PendingThrow {
                class: err.exception_class(),
                message: format!("{entry}: {err}"),
            };
            (T::default(), Some(pending))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(entry, panic = %message, "Native call panicked");
            let pending = PendingThrow {
                class: RUNTIME_EXCEPTION,
                message: format!("{entry}: {message}"),
            };
            (T::default(), Some(pending))
        }
    }
}

/// Throw `class` unless an exception is already pending.
fn throw(env: &mut JNIEnv<'_>, class: &str, message: &str) {
    if env.exception_check().unwrap_or(false) {
        return;
    }
    if let Err(err) = env.throw_new(class, message) {
        tracing::error!(class, error = %err, "Failed to throw Java exception");
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "native panic".to_string()
    }
}

fn to_handle(handle: jlong) -> u64 {
    handle as u64
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_allocate<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jlong {
    guarded(&mut env, "JNIPoint.allocate", |_| Ok(point::point_allocate() as jlong))
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_free<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    this_point: jlong,
) {
    guarded(&mut env, "JNIPoint.free", |_| {
        point::point_free(to_handle(this_point))?;
        Ok(())
    })
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_getX<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    this_point: jlong,
) -> jint {
    guarded(&mut env, "JNIPoint.getX", |_| Ok(point::point_get_x(to_handle(this_point))?))
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_setX<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    this_point: jlong,
    value: jint,
) {
    guarded(&mut env, "JNIPoint.setX", |_| Ok(point::point_set_x(to_handle(this_point), value)?))
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_getY<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    this_point: jlong,
) -> jint {
    guarded(&mut env, "JNIPoint.getY", |_| Ok(point::point_get_y(to_handle(this_point))?))
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_setY<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    this_point: jlong,
    value: jint,
) {
    guarded(&mut env, "JNIPoint.setY", |_| Ok(point::point_set_y(to_handle(this_point), value)?))
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_JNIPoint_distance<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    this_point: jlong,
    other: jlong,
) -> jdouble {
    guarded(&mut env, "JNIPoint.distance", |_| {
        let _span = perf_span!("JNIPoint.distance");
        Ok(point::point_distance(to_handle(this_point), to_handle(other))?)
    })
}

#[no_mangle]
pub extern "system" fn Java_org_openjdk_bench_jdk_incubator_foreign_points_support_BBPoint_distance<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    buff_p1: JByteBuffer<'local>,
    buff_p2: JByteBuffer<'local>,
) -> jdouble {
    guarded(&mut env, "BBPoint.distance", |env| {
        let _span = perf_span!("BBPoint.distance");
        buffer_distance(env, &buff_p1, &buff_p2)
    })
}
